//! Avatar Dialog Component
//!
//! Modal carrying the encoded username and session token for the server's
//! upload form. It can only be submitted to the server or dismissed.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::views::profile::AvatarForm;

#[component]
pub fn AvatarDialog(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let form = AvatarForm::for_session(&ctx.session.get_untracked());
    let upload_url = ctx.config().avatar_upload_url();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" style="width: 400px" on:click=|ev| ev.stop_propagation()>
                <h2>{ctx.text("editAvatar")}</h2>
                <form method="post" enctype="multipart/form-data" action=upload_url>
                    <input type="hidden" name="username" value=form.username />
                    <input type="hidden" name="token" value=form.token />
                    <input type="file" name="avatar" accept="image/*" />
                    <button type="submit">{ctx.text("upload")}</button>
                </form>
                <button class="dialog-close" on:click=move |_| on_close.run(())>
                    {ctx.text("close")}
                </button>
            </div>
        </div>
    }
}
