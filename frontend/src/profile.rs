use crate::api::ScoutApi;
use crate::toast::ToastQueue;
use log::{debug, error};
use shared::{Result, ScoutingProfile, UpdatePlayerProfileRequest};

/// Single-form profile editor: validates, saves once, reports through toasts.
///
/// Validation failures are reported without a network call.
pub async fn save_profile(
    api: &dyn ScoutApi,
    toasts: &ToastQueue,
    player_id: &str,
    update: &UpdatePlayerProfileRequest,
) -> Result<ScoutingProfile> {
    if let Err(e) = update.validate_fields() {
        debug!("Profile update for {} rejected locally: {}", player_id, e);
        toasts.error(e.user_message());
        return Err(e);
    }

    match api.update_player_profile(player_id, update).await {
        Ok(profile) => {
            toasts.success("Profile updated");
            Ok(profile)
        }
        Err(e) => {
            error!("Profile update for {} failed: {}", player_id, e);
            toasts.error(e.user_message());
            Err(e)
        }
    }
}
