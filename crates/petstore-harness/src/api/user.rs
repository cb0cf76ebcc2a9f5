use crate::HarnessError;
use crate::models::User;
use crate::request::RequestSpec;

/// `POST /user`
pub fn create(user: &User) -> Result<RequestSpec, HarnessError> {
    RequestSpec::post("/user").json(user)
}

/// `POST /user/createWithArray`
pub fn create_with_array(users: &[User]) -> Result<RequestSpec, HarnessError> {
    RequestSpec::post("/user/createWithArray").json(users)
}

/// `POST /user/createWithList`
pub fn create_with_list(users: &[User]) -> Result<RequestSpec, HarnessError> {
    RequestSpec::post("/user/createWithList").json(users)
}

/// `GET /user/{username}`
pub fn get(username: &str) -> RequestSpec {
    RequestSpec::get("/user/{username}").path_param("username", username)
}

/// `PUT /user/{username}`
pub fn update(username: &str, user: &User) -> Result<RequestSpec, HarnessError> {
    RequestSpec::put("/user/{username}")
        .path_param("username", username)
        .json(user)
}

/// `DELETE /user/{username}`
pub fn delete(username: &str) -> RequestSpec {
    RequestSpec::delete("/user/{username}").path_param("username", username)
}

/// `GET /user/login?username=..&password=..`
pub fn login(username: &str, password: &str) -> RequestSpec {
    RequestSpec::get("/user/login")
        .query("username", username)
        .query("password", password)
}

/// `GET /user/logout`
pub fn logout() -> RequestSpec {
    RequestSpec::get("/user/logout")
}
