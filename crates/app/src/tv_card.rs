//! TV dashboard-card generation.
//!
//! Scans the entity-state list for a TV's `media_player`/`remote` pair and
//! emits a static Lovelace card wired to the chosen entities. Matching is
//! identifier/name substring search only; the card itself is pure
//! templating.

use hubscope_domain::entity::Entity;

/// Substrings that mark an entity as TV-related, checked case-insensitively
/// against the identifier and the friendly name.
const TV_KEYWORDS: [&str; 6] = ["sony", "bravia", "kd-55", "kd55", "tv", "fernseher"];

/// A matched entity, with enough context to present a choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TvCandidate {
    pub entity_id: String,
    pub name: String,
    pub state: String,
}

impl TvCandidate {
    fn from_entity(entity: &Entity) -> Self {
        Self {
            entity_id: entity.entity_id.clone(),
            name: entity.display_name().to_string(),
            state: entity.state.clone(),
        }
    }
}

/// TV control surface candidates found in the entity list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TvCandidates {
    pub media_players: Vec<TvCandidate>,
    pub remotes: Vec<TvCandidate>,
}

fn mentions_tv(entity: &Entity) -> bool {
    let id = entity.entity_id.to_lowercase();
    let name = entity.friendly_name().unwrap_or_default().to_lowercase();
    TV_KEYWORDS
        .iter()
        .any(|keyword| id.contains(keyword) || name.contains(keyword))
}

/// Partition TV-related `media_player.*` and `remote.*` entities.
///
/// Input order is preserved; entities from other domains are ignored.
#[must_use]
pub fn find_candidates(entities: &[Entity]) -> TvCandidates {
    let mut candidates = TvCandidates::default();

    for entity in entities {
        if !mentions_tv(entity) {
            continue;
        }
        if entity.entity_id.starts_with("media_player.") {
            candidates.media_players.push(TvCandidate::from_entity(entity));
        } else if entity.entity_id.starts_with("remote.") {
            candidates.remotes.push(TvCandidate::from_entity(entity));
        }
    }

    candidates
}

fn remote_button(out: &mut String, name: &str, icon: &str, command: &str, remote_id: &str) {
    out.push_str(&format!(
        "      - type: button\n\
         \x20       name: \"{name}\"\n\
         \x20       icon: {icon}\n\
         \x20       tap_action:\n\
         \x20         action: call-service\n\
         \x20         service: remote.send_command\n\
         \x20         data:\n\
         \x20           command: {command}\n\
         \x20         target:\n\
         \x20           entity_id: {remote_id}\n"
    ));
}

fn player_button(out: &mut String, name: &str, icon: &str, service: &str, player_id: &str) {
    out.push_str(&format!(
        "      - type: button\n\
         \x20       name: \"{name}\"\n\
         \x20       icon: {icon}\n\
         \x20       tap_action:\n\
         \x20         action: call-service\n\
         \x20         service: media_player.{service}\n\
         \x20         target:\n\
         \x20           entity_id: {player_id}\n"
    ));
}

/// Build the Lovelace card YAML for the chosen media player and remote.
#[must_use]
pub fn remote_card(media_player_id: &str, remote_id: &str) -> String {
    let mut out = String::new();

    out.push_str("type: vertical-stack\ncards:\n");

    // Status row
    out.push_str(&format!(
        "  - type: entities\n\
         \x20   title: \"TV\"\n\
         \x20   entities:\n\
         \x20     - entity: {media_player_id}\n\
         \x20       name: \"TV Status\"\n\
         \x20   state_color: true\n"
    ));

    // Power / home / input
    out.push_str("  - type: grid\n    columns: 3\n    square: false\n    cards:\n");
    player_button(&mut out, "Power", "mdi:power", "toggle", media_player_id);
    remote_button(&mut out, "Home", "mdi:home", "HOME", remote_id);
    remote_button(&mut out, "Input", "mdi:import", "INPUT", remote_id);

    // Directional pad
    out.push_str("  - type: grid\n    columns: 3\n    square: false\n    cards:\n");
    remote_button(&mut out, "", "mdi:chevron-up", "UP", remote_id);
    remote_button(&mut out, "Back", "mdi:arrow-left", "RETURN", remote_id);
    remote_button(&mut out, "", "mdi:chevron-left", "LEFT", remote_id);
    remote_button(&mut out, "OK", "mdi:checkbox-blank-circle", "CONFIRM", remote_id);
    remote_button(&mut out, "", "mdi:chevron-right", "RIGHT", remote_id);
    remote_button(&mut out, "", "mdi:chevron-down", "DOWN", remote_id);

    // Volume and channels
    out.push_str("  - type: grid\n    columns: 4\n    square: false\n    cards:\n");
    player_button(&mut out, "Vol+", "mdi:volume-plus", "volume_up", media_player_id);
    player_button(&mut out, "Vol-", "mdi:volume-minus", "volume_down", media_player_id);
    remote_button(&mut out, "CH+", "mdi:chevron-up-box", "CHANNEL_UP", remote_id);
    remote_button(&mut out, "CH-", "mdi:chevron-down-box", "CHANNEL_DOWN", remote_id);

    // Transport
    out.push_str("  - type: grid\n    columns: 5\n    square: false\n    cards:\n");
    remote_button(&mut out, "", "mdi:rewind", "REWIND", remote_id);
    player_button(&mut out, "", "mdi:play", "media_play", media_player_id);
    player_button(&mut out, "", "mdi:pause", "media_pause", media_player_id);
    player_button(&mut out, "", "mdi:stop", "media_stop", media_player_id);
    remote_button(&mut out, "", "mdi:fast-forward", "FORWARD", remote_id);

    out
}
