use std::fmt;

use serde::{Deserialize, Serialize};

/// Client-reported analytics event. Fields default individually, so a
/// partial body decodes to empty/zero rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackEvent {
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub scene: String,
    #[serde(default)]
    pub ts: i64,
}

impl fmt::Display for TrackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event={} scene={} ts={}", self.event, self.scene, self.ts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_body_decodes() {
        let ev: TrackEvent =
            serde_json::from_str(r#"{"event":"open","scene":"home","ts":1700000000}"#).unwrap();
        assert_eq!(ev.event, "open");
        assert_eq!(ev.scene, "home");
        assert_eq!(ev.ts, 1700000000);
    }

    #[test]
    fn missing_fields_default_to_empty_and_zero() {
        let ev: TrackEvent = serde_json::from_str(r#"{"event":"open"}"#).unwrap();
        assert_eq!(ev.event, "open");
        assert_eq!(ev.scene, "");
        assert_eq!(ev.ts, 0);
    }

    #[test]
    fn log_line_format() {
        let ev = TrackEvent {
            event: "open".to_string(),
            scene: "home".to_string(),
            ts: 1700000000,
        };
        assert_eq!(ev.to_string(), "event=open scene=home ts=1700000000");
    }

    #[test]
    fn default_record_logs_zero_values() {
        assert_eq!(TrackEvent::default().to_string(), "event= scene= ts=0");
    }
}
