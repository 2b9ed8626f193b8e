//! User registration handlers.
//!
//! ```text
//! GET    /user
//! GET    /user/{id}
//! POST   /user       {"firstName":"Saba","surname":"Shaikh","pinCode":400018}
//! PUT    /user       {"userId":1,"firstName":"Saba",...}
//! DELETE /user/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::ports::UpdateUserRequest;
use crate::domain::{Error, PinCode, User, UserDetails, UserId, missing_user_or_id};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, date_from_epoch_millis, parse_optional_date, parse_user_id,
};

const USER_ID_FIELD: FieldName = FieldName::new("id");
const DOB_FIELD: FieldName = FieldName::new("dob");
const DOJ_FIELD: FieldName = FieldName::new("doj");

/// Postal code as clients send it: `"400018"` or `400018`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum PinCodeInput {
    /// Sent as a JSON string, kept verbatim.
    Text(String),
    /// Sent as a JSON number.
    Number(u64),
}

impl From<PinCodeInput> for PinCode {
    fn from(value: PinCodeInput) -> Self {
        match value {
            PinCodeInput::Text(text) => PinCode::new(text),
            PinCodeInput::Number(number) => PinCode::from(number),
        }
    }
}

/// Date as clients send it: `"1999-08-15"`, `"1999-08-15T10:00:00Z"` or
/// milliseconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DateInput {
    /// A calendar date or an RFC 3339 date-time.
    Text(String),
    /// Milliseconds since 1970-01-01T00:00:00Z.
    Millis(i64),
}

impl DateInput {
    fn resolve(input: Option<Self>, field: FieldName) -> Result<Option<NaiveDate>, Error> {
        match input {
            None => Ok(None),
            Some(Self::Text(text)) => parse_optional_date(Some(&text), field),
            Some(Self::Millis(millis)) => date_from_epoch_millis(millis, field).map(Some),
        }
    }
}

/// Request body for `POST /user` and `PUT /user`.
///
/// Every field may be omitted. `userId` is ignored on create and required on
/// update.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPayload {
    /// Identifier of the user to update.
    #[schema(example = 1)]
    pub user_id: Option<i64>,
    /// Given name; missing means empty.
    #[schema(example = "Saba")]
    pub first_name: Option<String>,
    /// Family name; missing means empty.
    #[schema(example = "Shaikh")]
    pub surname: Option<String>,
    /// Free-text postal address.
    #[schema(example = "Mumbai")]
    pub address: Option<String>,
    /// Postal code, string or number.
    #[schema(value_type = Option<String>, example = "400018")]
    pub pin_code: Option<PinCodeInput>,
    /// Date of birth.
    #[schema(value_type = Option<String>, example = "1999-08-15")]
    pub dob: Option<DateInput>,
    /// Date of joining.
    #[schema(value_type = Option<String>, example = "2000-06-19")]
    pub doj: Option<DateInput>,
}

impl UserPayload {
    /// Validate dates and split into identifier and details.
    fn into_parts(self) -> Result<(Option<UserId>, UserDetails), Error> {
        let dob = DateInput::resolve(self.dob, DOB_FIELD)?;
        let doj = DateInput::resolve(self.doj, DOJ_FIELD)?;
        let details = UserDetails {
            first_name: self.first_name.unwrap_or_default(),
            surname: self.surname.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            pin_code: self.pin_code.map(PinCode::from).unwrap_or_default(),
            dob,
            doj,
        };
        Ok((self.user_id.map(UserId::new), details))
    }
}

/// User record returned by every successful read or write.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Store-assigned identifier.
    #[schema(example = 1)]
    pub user_id: i64,
    /// Given name.
    #[schema(example = "Saba")]
    pub first_name: String,
    /// Family name.
    #[schema(example = "Shaikh")]
    pub surname: String,
    /// Free-text postal address.
    #[schema(example = "Mumbai")]
    pub address: String,
    /// Postal code, always a string.
    #[schema(example = "400018")]
    pub pin_code: String,
    /// Date of birth as `YYYY-MM-DD`, or `null`.
    #[schema(value_type = Option<String>, format = Date, example = "1999-08-15")]
    pub dob: Option<NaiveDate>,
    /// Date of joining as `YYYY-MM-DD`, or `null`.
    #[schema(value_type = Option<String>, format = Date, example = "2000-06-19")]
    pub doj: Option<NaiveDate>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let (id, details) = user.into_parts();
        Self {
            user_id: id.as_i64(),
            first_name: details.first_name,
            surname: details.surname,
            address: details.address,
            pin_code: details.pin_code.to_string(),
            dob: details.dob,
            doj: details.doj,
        }
    }
}

/// JSON extractor settings that report malformed bodies as domain errors.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_registration::inbound::http::users::{create_user, json_config};
///
/// let app = App::new().app_data(json_config()).service(create_user);
/// ```
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "rejecting malformed user payload");
        Error::invalid_request("request body must be a JSON user object")
            .with_details(json!({ "code": "invalid_body" }))
            .into()
    })
}

/// List every registered user.
#[utoipa::path(
    get,
    path = "/user",
    responses(
        (status = 200, description = "All users in identifier order", body = [UserResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/user")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserResponse>>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Fetch one user by identifier.
#[utoipa::path(
    get,
    path = "/user/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Matching user", body = UserResponse),
        (status = 400, description = "Unknown or malformed identifier", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/user/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserResponse>> {
    let id = parse_user_id(&path.into_inner(), USER_ID_FIELD)?;
    let user = state.users_query.find_user(id).await?;
    Ok(web::Json(user.into()))
}

/// Register a new user. Any `userId` in the body is ignored.
#[utoipa::path(
    post,
    path = "/user",
    request_body = UserPayload,
    responses(
        (status = 200, description = "Stored user with its assigned identifier", body = UserResponse),
        (status = 400, description = "Malformed body or date", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/user")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserPayload>,
) -> ApiResult<web::Json<UserResponse>> {
    let (ignored_id, details) = payload.into_inner().into_parts()?;
    if let Some(id) = ignored_id {
        debug!(user_id = %id, "ignoring client-supplied id on create");
    }
    let user = state.users_command.create_user(details).await?;
    Ok(web::Json(user.into()))
}

/// Replace an existing user's details.
#[utoipa::path(
    put,
    path = "/user",
    request_body = UserPayload,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "Missing or unknown identifier", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/user")]
pub async fn update_user(
    state: web::Data<HttpState>,
    payload: web::Json<Option<UserPayload>>,
) -> ApiResult<web::Json<UserResponse>> {
    let Some(payload) = payload.into_inner() else {
        return Err(missing_user_or_id());
    };
    let (id, details) = payload.into_parts()?;
    let user = state
        .users_command
        .update_user(UpdateUserRequest { id, details })
        .await?;
    Ok(web::Json(user.into()))
}

/// Remove a user. Responds with an empty 200.
#[utoipa::path(
    delete,
    path = "/user/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User removed"),
        (status = 400, description = "Unknown or malformed identifier", body = ErrorSchema),
        (status = 503, description = "User store unavailable", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/user/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_user_id(&path.into_inner(), USER_ID_FIELD)?;
    state.users_command.delete_user(id).await?;
    Ok(HttpResponse::Ok().finish())
}
