//! The smoke scenarios. Each one is a straight line of build, send,
//! assert, sometimes feeding an id or username from one step into the next.

use crate::HarnessError;
use crate::api::{pet, store, user};
use crate::builders::{self, DEFAULT_PASSWORD};
use crate::dispatcher::Dispatch;
use crate::harness::{Harness, ScenarioOutcome, ScenarioRun};
use crate::ids::{unique_id, unique_name};
use crate::models::PetStatus;

pub const PET_FEATURE: &str = "Pet operations";
pub const STORE_FEATURE: &str = "Store operations";
pub const USER_FEATURE: &str = "User operations";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    AddAndUpdatePet,
    FindPetsByStatus,
    FindPetsByTags,
    UpdatePetWithForm,
    DeletePet,
    PlaceOrderAndGetById,
    DeleteOrder,
    CreateUserAndGetByUsername,
    CreateUsersWithArray,
    CreateUsersWithList,
    UpdateUser,
    DeleteUser,
    LoginAndLogout,
}

impl Scenario {
    pub const ALL: [Scenario; 13] = [
        Scenario::AddAndUpdatePet,
        Scenario::FindPetsByStatus,
        Scenario::FindPetsByTags,
        Scenario::UpdatePetWithForm,
        Scenario::DeletePet,
        Scenario::PlaceOrderAndGetById,
        Scenario::DeleteOrder,
        Scenario::CreateUserAndGetByUsername,
        Scenario::CreateUsersWithArray,
        Scenario::CreateUsersWithList,
        Scenario::UpdateUser,
        Scenario::DeleteUser,
        Scenario::LoginAndLogout,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::AddAndUpdatePet => "add_and_update_pet",
            Scenario::FindPetsByStatus => "find_pets_by_status",
            Scenario::FindPetsByTags => "find_pets_by_tags",
            Scenario::UpdatePetWithForm => "update_pet_with_form",
            Scenario::DeletePet => "delete_pet",
            Scenario::PlaceOrderAndGetById => "place_order_and_get_by_id",
            Scenario::DeleteOrder => "delete_order",
            Scenario::CreateUserAndGetByUsername => "create_user_and_get_by_username",
            Scenario::CreateUsersWithArray => "create_users_with_array",
            Scenario::CreateUsersWithList => "create_users_with_list",
            Scenario::UpdateUser => "update_user",
            Scenario::DeleteUser => "delete_user",
            Scenario::LoginAndLogout => "login_and_logout",
        }
    }

    pub fn feature(self) -> &'static str {
        match self {
            Scenario::AddAndUpdatePet
            | Scenario::FindPetsByStatus
            | Scenario::FindPetsByTags
            | Scenario::UpdatePetWithForm
            | Scenario::DeletePet => PET_FEATURE,
            Scenario::PlaceOrderAndGetById | Scenario::DeleteOrder => STORE_FEATURE,
            Scenario::CreateUserAndGetByUsername
            | Scenario::CreateUsersWithArray
            | Scenario::CreateUsersWithList
            | Scenario::UpdateUser
            | Scenario::DeleteUser
            | Scenario::LoginAndLogout => USER_FEATURE,
        }
    }

    pub fn story(self) -> &'static str {
        match self {
            Scenario::AddAndUpdatePet => "Create and update a pet",
            Scenario::FindPetsByStatus => "Find pets by status",
            Scenario::FindPetsByTags => "Find pets by tags",
            Scenario::UpdatePetWithForm => "Update a pet with form data",
            Scenario::DeletePet => "Delete a pet",
            Scenario::PlaceOrderAndGetById => "Place an order and fetch it by id",
            Scenario::DeleteOrder => "Delete an order",
            Scenario::CreateUserAndGetByUsername => "Create a user and fetch it by username",
            Scenario::CreateUsersWithArray => "Create users from an array",
            Scenario::CreateUsersWithList => "Create users from a list",
            Scenario::UpdateUser => "Update a user",
            Scenario::DeleteUser => "Delete a user",
            Scenario::LoginAndLogout => "Log a user in and out",
        }
    }

    pub async fn run<D: Dispatch>(self, harness: &Harness<D>) -> ScenarioOutcome {
        let mut run = harness.scenario(self.name(), self.feature(), self.story());
        let result = match self {
            Scenario::AddAndUpdatePet => add_and_update_pet(&mut run).await,
            Scenario::FindPetsByStatus => find_pets_by_status(&mut run).await,
            Scenario::FindPetsByTags => find_pets_by_tags(&mut run).await,
            Scenario::UpdatePetWithForm => update_pet_with_form(&mut run).await,
            Scenario::DeletePet => delete_pet(&mut run).await,
            Scenario::PlaceOrderAndGetById => place_order_and_get_by_id(&mut run).await,
            Scenario::DeleteOrder => delete_order(&mut run).await,
            Scenario::CreateUserAndGetByUsername => create_user_and_get_by_username(&mut run).await,
            Scenario::CreateUsersWithArray => create_users_with_array(&mut run).await,
            Scenario::CreateUsersWithList => create_users_with_list(&mut run).await,
            Scenario::UpdateUser => update_user(&mut run).await,
            Scenario::DeleteUser => delete_user(&mut run).await,
            Scenario::LoginAndLogout => login_and_logout(&mut run).await,
        };
        run.finish(result)
    }
}

/// Run every scenario in order. A failing scenario does not stop the rest.
pub async fn run_all<D: Dispatch>(harness: &Harness<D>) -> Vec<(Scenario, ScenarioOutcome)> {
    let mut outcomes = Vec::with_capacity(Scenario::ALL.len());
    for scenario in Scenario::ALL {
        outcomes.push((scenario, scenario.run(harness).await));
    }
    outcomes
}

// =============================================================================
// PET
// =============================================================================

pub async fn add_and_update_pet<D: Dispatch>(
    run: &mut ScenarioRun<'_, D>,
) -> Result<(), HarnessError> {
    let pet_id = unique_id();

    let new_pet = builders::pet(pet_id, PetStatus::Available, "update-tag");
    run.step("Create pet", pet::create(&new_pet)?).await?;

    let updated_pet = builders::pet(pet_id, PetStatus::Sold, "update-tag")
        .with_name(format!("updated_name_{pet_id}"));
    run.step("Update pet", pet::update(&updated_pet)?).await?;

    Ok(())
}

pub async fn find_pets_by_status<D: Dispatch>(
    run: &mut ScenarioRun<'_, D>,
) -> Result<(), HarnessError> {
    run.step("Find pets by status", pet::find_by_status(&PetStatus::Available))
        .await?;
    Ok(())
}

pub async fn find_pets_by_tags<D: Dispatch>(
    run: &mut ScenarioRun<'_, D>,
) -> Result<(), HarnessError> {
    let tag_name = unique_name("tag");
    run.step("Find pets by tags", pet::find_by_tags(&tag_name)).await?;
    Ok(())
}

pub async fn update_pet_with_form<D: Dispatch>(
    run: &mut ScenarioRun<'_, D>,
) -> Result<(), HarnessError> {
    let pet_id = unique_id();
    let name = format!("form_name_{pet_id}");
    run.step(
        "Update pet with form",
        pet::update_with_form(pet_id, &name, &PetStatus::Pending),
    )
    .await?;
    Ok(())
}

pub async fn delete_pet<D: Dispatch>(run: &mut ScenarioRun<'_, D>) -> Result<(), HarnessError> {
    let pet_id = unique_id();
    run.step("Delete pet", pet::delete(pet_id)).await?;
    Ok(())
}

// =============================================================================
// STORE
// =============================================================================

/// Create the pet an order refers to, then place the order. Returns the order id.
async fn place_order_for_new_pet<D: Dispatch>(
    run: &mut ScenarioRun<'_, D>,
) -> Result<i64, HarnessError> {
    let pet_id = unique_id();
    run.step("Create pet for order", pet::create(&builders::order_pet(pet_id))?)
        .await?;

    let order = builders::order(pet_id);
    run.step("Place order", store::place_order(&order)?).await?;

    Ok(order.id)
}

pub async fn place_order_and_get_by_id<D: Dispatch>(
    run: &mut ScenarioRun<'_, D>,
) -> Result<(), HarnessError> {
    let order_id = place_order_for_new_pet(run).await?;
    run.step("Get order by id", store::get_order(order_id)).await?;
    Ok(())
}

pub async fn delete_order<D: Dispatch>(run: &mut ScenarioRun<'_, D>) -> Result<(), HarnessError> {
    let order_id = place_order_for_new_pet(run).await?;
    run.step("Delete order", store::delete_order(order_id)).await?;
    Ok(())
}

// =============================================================================
// USER
// =============================================================================

/// Create a user named `{prefix}_{id}` and return its username.
async fn create_user<D: Dispatch>(
    run: &mut ScenarioRun<'_, D>,
    prefix: &str,
) -> Result<String, HarnessError> {
    let username = unique_name(prefix);
    run.step("Create user", user::create(&builders::user(&username))?)
        .await?;
    Ok(username)
}

pub async fn create_user_and_get_by_username<D: Dispatch>(
    run: &mut ScenarioRun<'_, D>,
) -> Result<(), HarnessError> {
    let username = create_user(run, "user").await?;
    run.step("Get user by username", user::get(&username)).await?;
    Ok(())
}

pub async fn create_users_with_array<D: Dispatch>(
    run: &mut ScenarioRun<'_, D>,
) -> Result<(), HarnessError> {
    let users = [
        builders::user(&unique_name("arrayUser1")),
        builders::user(&unique_name("arrayUser2")),
    ];
    run.step("Create users with array", user::create_with_array(&users)?)
        .await?;
    Ok(())
}

pub async fn create_users_with_list<D: Dispatch>(
    run: &mut ScenarioRun<'_, D>,
) -> Result<(), HarnessError> {
    let users = vec![
        builders::user(&unique_name("listUser1")),
        builders::user(&unique_name("listUser2")),
    ];
    run.step("Create users with list", user::create_with_list(&users)?)
        .await?;
    Ok(())
}

pub async fn update_user<D: Dispatch>(run: &mut ScenarioRun<'_, D>) -> Result<(), HarnessError> {
    let username = create_user(run, "updateUser").await?;

    let updated = builders::user(&username).with_names("UpdatedFirst", "UpdatedLast");
    run.step("Update user", user::update(&username, &updated)?)
        .await?;
    Ok(())
}

pub async fn delete_user<D: Dispatch>(run: &mut ScenarioRun<'_, D>) -> Result<(), HarnessError> {
    let username = create_user(run, "deleteUser").await?;
    run.step("Delete user", user::delete(&username)).await?;
    Ok(())
}

pub async fn login_and_logout<D: Dispatch>(
    run: &mut ScenarioRun<'_, D>,
) -> Result<(), HarnessError> {
    let username = create_user(run, "loginUser").await?;
    run.step("Log in", user::login(&username, DEFAULT_PASSWORD))
        .await?;
    run.step("Log out", user::logout()).await?;
    Ok(())
}
