use crate::{
    model::profile::{ProfileData, ProfileDto},
    server::{error::Error, service::identity::IdentityClient},
};

pub struct ProfileService<'a> {
    identity: &'a IdentityClient,
}

impl<'a> ProfileService<'a> {
    /// Creates a new instance of [`ProfileService`]
    pub fn new(identity: &'a IdentityClient) -> Self {
        Self { identity }
    }

    /// Fetches the provider profile of an authenticated identity
    ///
    /// The provider's `avatar_url` is exposed as `avatarUrl` next to the untouched provider
    /// fields.
    pub async fn get_profile(&self, identity_id: i64) -> Result<ProfileDto, Error> {
        let provider_fields = self.identity.get_profile(identity_id).await?;

        Ok(ProfileDto {
            data: ProfileData::from_provider(provider_fields),
        })
    }
}
