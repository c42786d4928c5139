//! List system permissions use case

use shared::error::SystemError;
use shared::models::Permission;

use crate::contracts::PermissionContract;

pub struct ListPermissionsUseCase<'a, C> {
    permission_contract: &'a C,
}

impl<'a, C: PermissionContract> ListPermissionsUseCase<'a, C> {
    pub fn new(permission_contract: &'a C) -> Self {
        Self {
            permission_contract,
        }
    }

    pub async fn execute(&self) -> Result<Vec<Permission>, SystemError> {
        self.permission_contract.get_all().await
    }
}
