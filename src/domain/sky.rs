use serde::{Deserialize, Serialize};

/// Time-of-day background phase. Total over every hour 0..=23.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkyPhase {
    Dawn,
    Day,
    Dusk,
    Night,
}

impl SkyPhase {
    /// Map an hour-of-day to its phase: [6,8) dawn, [8,17) day, [17,19)
    /// dusk, night otherwise. Hours >= 24 fold into the same-day range.
    pub fn for_hour(hour: u32) -> SkyPhase {
        match hour % 24 {
            6..=7 => SkyPhase::Dawn,
            8..=16 => SkyPhase::Day,
            17..=18 => SkyPhase::Dusk,
            _ => SkyPhase::Night,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SkyPhase::Dawn => "dawn",
            SkyPhase::Day => "day",
            SkyPhase::Dusk => "dusk",
            SkyPhase::Night => "night",
        }
    }

    fn from_key(key: &str) -> Option<SkyPhase> {
        match key {
            "dawn" => Some(SkyPhase::Dawn),
            "day" => Some(SkyPhase::Day),
            "dusk" => Some(SkyPhase::Dusk),
            "night" => Some(SkyPhase::Night),
            _ => None,
        }
    }

    const ALL: [SkyPhase; 4] = [SkyPhase::Dawn, SkyPhase::Day, SkyPhase::Dusk, SkyPhase::Night];
}

/// A two-stop vertical gradient, bottom color first.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SkyGradient {
    pub bottom: String,
    pub top: String,
}

impl SkyGradient {
    fn new(bottom: &str, top: &str) -> Self {
        Self {
            bottom: bottom.to_string(),
            top: top.to_string(),
        }
    }

    /// CSS the host can assign to `body.style.background` directly.
    pub fn to_css(&self) -> String {
        format!("linear-gradient(to top, {}, {})", self.bottom, self.top)
    }
}

#[derive(Serialize, Deserialize)]
struct SkyManifestEntry {
    phase: String,
    bottom: String,
    top: String,
}

#[derive(Serialize, Deserialize)]
struct SkyManifest {
    gradients: Vec<SkyManifestEntry>,
}

/// The four gradient presets, exchangeable with the host as JSON.
#[derive(Clone, Debug)]
pub struct SkyPalette {
    dawn: SkyGradient,
    day: SkyGradient,
    dusk: SkyGradient,
    night: SkyGradient,
}

impl Default for SkyPalette {
    fn default() -> Self {
        Self {
            dawn: SkyGradient::new("#FFCC80", "#81D4FA"),
            day: SkyGradient::new("#2196F3", "#BBDEFB"),
            dusk: SkyGradient::new("#FF5722", "#673AB7"),
            night: SkyGradient::new("#1A237E", "#000000"),
        }
    }
}

impl SkyPalette {
    pub fn gradient(&self, phase: SkyPhase) -> &SkyGradient {
        match phase {
            SkyPhase::Dawn => &self.dawn,
            SkyPhase::Day => &self.day,
            SkyPhase::Dusk => &self.dusk,
            SkyPhase::Night => &self.night,
        }
    }

    fn gradient_mut(&mut self, phase: SkyPhase) -> &mut SkyGradient {
        match phase {
            SkyPhase::Dawn => &mut self.dawn,
            SkyPhase::Day => &mut self.day,
            SkyPhase::Dusk => &mut self.dusk,
            SkyPhase::Night => &mut self.night,
        }
    }

    /// Parse a host-supplied palette. Every one of the four phases must be
    /// present; unknown phase keys are an error so typos don't silently keep
    /// a default gradient.
    pub fn from_manifest_json(json: &str) -> Result<Self, String> {
        let manifest: SkyManifest = serde_json::from_str(json).map_err(|e| e.to_string())?;

        let mut palette = SkyPalette::default();
        let mut seen = [false; 4];
        for entry in &manifest.gradients {
            let Some(phase) = SkyPhase::from_key(&entry.phase) else {
                return Err(format!("unknown sky phase '{}'", entry.phase));
            };
            let idx = SkyPhase::ALL.iter().position(|p| *p == phase).unwrap_or(0);
            seen[idx] = true;
            *palette.gradient_mut(phase) = SkyGradient::new(&entry.bottom, &entry.top);
        }

        for (idx, phase) in SkyPhase::ALL.iter().enumerate() {
            if !seen[idx] {
                return Err(format!("sky manifest is missing phase '{}'", phase.key()));
            }
        }

        Ok(palette)
    }

    pub fn to_manifest_json(&self) -> String {
        let manifest = SkyManifest {
            gradients: SkyPhase::ALL
                .iter()
                .map(|phase| {
                    let g = self.gradient(*phase);
                    SkyManifestEntry {
                        phase: phase.key().to_string(),
                        bottom: g.bottom.clone(),
                        top: g.top.clone(),
                    }
                })
                .collect(),
        };
        // Serialization of plain strings cannot fail.
        serde_json::to_string(&manifest).unwrap_or_default()
    }
}
