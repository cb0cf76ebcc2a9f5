use crate::HarnessError;
use crate::models::{Pet, PetStatus};
use crate::request::RequestSpec;

/// `POST /pet`
pub fn create(pet: &Pet) -> Result<RequestSpec, HarnessError> {
    RequestSpec::post("/pet").json(pet)
}

/// `PUT /pet`
pub fn update(pet: &Pet) -> Result<RequestSpec, HarnessError> {
    RequestSpec::put("/pet").json(pet)
}

/// `GET /pet/findByStatus?status=..`
pub fn find_by_status(status: &PetStatus) -> RequestSpec {
    RequestSpec::get("/pet/findByStatus").query("status", status)
}

/// `GET /pet/findByTags?tags=..`
pub fn find_by_tags(tag_name: &str) -> RequestSpec {
    RequestSpec::get("/pet/findByTags").query("tags", tag_name)
}

/// `POST /pet/{petId}` with form fields `name` and `status`.
pub fn update_with_form(pet_id: i64, name: &str, status: &PetStatus) -> RequestSpec {
    RequestSpec::post("/pet/{petId}")
        .path_param("petId", pet_id)
        .form("name", name)
        .form("status", status)
}

/// `DELETE /pet/{petId}`
pub fn delete(pet_id: i64) -> RequestSpec {
    RequestSpec::delete("/pet/{petId}").path_param("petId", pet_id)
}
