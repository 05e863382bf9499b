use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::{
        entities::app_errors::CoreError,
        value_objects::{Paginated, Pagination},
    },
    pet::{
        entities::Pet,
        value_objects::{CreatePetInput, UpdatePetInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait PetRepository: Send + Sync {
    /// Lists pets of `owner_id`, or every pet when `owner_id` is `None`.
    fn fetch_pets(
        &self,
        owner_id: Option<Uuid>,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Paginated<Pet>, CoreError>> + Send;

    fn get_pet_by_id(
        &self,
        pet_id: Uuid,
    ) -> impl Future<Output = Result<Option<Pet>, CoreError>> + Send;

    fn create_pet(&self, pet: Pet) -> impl Future<Output = Result<Pet, CoreError>> + Send;

    fn update_pet(&self, pet: Pet) -> impl Future<Output = Result<Pet, CoreError>> + Send;

    fn delete_pet(&self, pet_id: Uuid) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait PetService: Send + Sync {
    fn get_pets(
        &self,
        identity: Identity,
        pagination: Pagination,
    ) -> impl Future<Output = Result<Paginated<Pet>, CoreError>> + Send;

    fn get_pet(
        &self,
        identity: Identity,
        pet_id: Uuid,
    ) -> impl Future<Output = Result<Pet, CoreError>> + Send;

    fn create_pet(
        &self,
        identity: Identity,
        input: CreatePetInput,
    ) -> impl Future<Output = Result<Pet, CoreError>> + Send;

    fn update_pet(
        &self,
        identity: Identity,
        pet_id: Uuid,
        input: UpdatePetInput,
    ) -> impl Future<Output = Result<Pet, CoreError>> + Send;

    fn delete_pet(
        &self,
        identity: Identity,
        pet_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
