//! User and team lookups.

use crate::client::Client;
use crate::error::{ClientError, Result};
use crate::types::{Team, User};
use crate::validation;
use serde::Deserialize;

/// Envelope around the profile returned by `users/@me`.
#[derive(Debug, Deserialize)]
struct MeResponse {
    user: Option<User>,
}

impl Client {
    /// Get the profile of the user owning the API token.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response carries no
    /// `user` field.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use camposcloud_client::Client;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let client = Client::new("my-api-token")?;
    /// let me = client.get_me().await?;
    /// println!("Hello {}", me.name);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_me(&self) -> Result<User> {
        let response = self.get("users/@me").await?;
        let me: MeResponse = self.handle_response(response).await?;

        me.user
            .ok_or_else(|| ClientError::InvalidResponse("missing `user` field".to_string()))
    }

    /// List the teams the user belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        let response = self.get("teams").await?;
        self.handle_response(response).await
    }

    /// Get a team by id.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `team_id` is empty, or an API error if the
    /// team does not exist.
    pub async fn get_team(&self, team_id: &str) -> Result<Team> {
        validation::team_id(team_id)?;

        let response = self.get(&format!("teams/{}", urlencoding::encode(team_id))).await?;
        self.handle_response(response).await
    }
}
