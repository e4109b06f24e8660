//! User Calls
//!
//! Bindings for user records, auxiliary profile fields and renaming.

use serde::Serialize;
use serde_json::{Map, Value};

use super::{Ack, ActionOutcome, Api, ApiError, Endpoint};
use crate::models::{User, UserData};
use crate::session::Session;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct UsernameArgs<'a> {
    username: &'a str,
}

#[derive(Serialize)]
struct UserIdArgs {
    #[serde(rename = "userID")]
    user_id: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UserDataArgs<'a> {
    data_names: &'a [&'a str],
    username: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SetUserDataArgs<'a> {
    data_name: &'a str,
    data_value: &'a str,
    username: &'a str,
    token: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EditUsernameArgs<'a> {
    username: &'a str,
    new_username: &'a str,
    token: &'a str,
}

// ========================
// Calls
// ========================

pub async fn get_user(api: &impl Api, username: &str) -> Result<User, ApiError> {
    let record: Option<Map<String, Value>> = api.call(Endpoint::User, &UsernameArgs { username }).await?;
    Ok(User::from_record(record.unwrap_or_default()))
}

pub async fn get_user_by_id(api: &impl Api, user_id: i64) -> Result<User, ApiError> {
    let record: Option<Map<String, Value>> = api.call(Endpoint::User, &UserIdArgs { user_id }).await?;
    Ok(User::from_record(record.unwrap_or_default()))
}

pub async fn get_user_data(api: &impl Api, username: &str, data_names: &[&str]) -> Result<UserData, ApiError> {
    let args = UserDataArgs { data_names, username };
    let record: Option<Map<String, Value>> = api.call(Endpoint::UserData, &args).await?;
    Ok(UserData::from_record(record.unwrap_or_default()))
}

pub async fn set_user_data(api: &impl Api, session: &Session, data_name: &str, data_value: &str) -> Result<ActionOutcome, ApiError> {
    let args = SetUserDataArgs {
        data_name,
        data_value,
        username: &session.username,
        token: &session.token,
    };
    let ack: Ack = api.call(Endpoint::SetUserData, &args).await?;
    Ok(ActionOutcome::from_success(ack))
}

pub async fn edit_username(api: &impl Api, session: &Session, new_username: &str) -> Result<ActionOutcome, ApiError> {
    let args = EditUsernameArgs {
        username: &session.username,
        new_username,
        token: &session.token,
    };
    let ack: Ack = api.call(Endpoint::EditUsername, &args).await?;
    Ok(ActionOutcome::from_success(ack))
}
