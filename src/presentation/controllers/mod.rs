//! HTTP controllers for handling requests

use std::sync::Arc;

use crate::application::{
    OwnerService, OwnerServiceImpl, PetService, PetServiceImpl, VetService, VetServiceImpl,
};
use crate::infrastructure::{OwnerRepository, PetRepository, VetRepository};

pub mod health;
pub mod owners;
pub mod pets;
pub mod vets;

pub use health::*;
pub use owners::*;
pub use pets::*;
pub use vets::*;

/// Application state shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub owner_service: Arc<dyn OwnerService>,
    pub pet_service: Arc<dyn PetService>,
    pub vet_service: Arc<dyn VetService>,
}

impl AppState {
    /// Wire the default services on top of the given repositories
    pub fn from_repositories(
        owners: Arc<dyn OwnerRepository>,
        pets: Arc<dyn PetRepository>,
        vets: Arc<dyn VetRepository>,
    ) -> Self {
        Self {
            owner_service: Arc::new(OwnerServiceImpl::new(owners.clone())),
            pet_service: Arc::new(PetServiceImpl::new(owners, pets)),
            vet_service: Arc::new(VetServiceImpl::new(vets)),
        }
    }
}
