//! Sprite-sheet regions handed to the sprite player

use serde::{Deserialize, Serialize};

/// One animation set inside a texture atlas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationRegion {
    /// Texture atlas the frames live in
    pub atlas: String,
    /// Region name inside the atlas
    pub region: String,
    pub frame_width: u32,
    pub frame_height: u32,
    pub frame_count: u32,
    /// Seconds per frame
    pub frame_duration: f32,
}

impl AnimationRegion {
    /// Soldier sheet layout shared by every equipment variant
    pub fn soldier(atlas: &str) -> Self {
        Self {
            atlas: atlas.to_string(),
            region: "soldier".to_string(),
            frame_width: 81,
            frame_height: 79,
            frame_count: 18,
            frame_duration: 0.04,
        }
    }

    /// Length of one full loop in seconds
    pub fn loop_duration(&self) -> f32 {
        self.frame_count as f32 * self.frame_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soldier_sheet_layout() {
        let region = AnimationRegion::soldier("textures/animations/soldier-animation.pack");
        assert_eq!(region.region, "soldier");
        assert_eq!((region.frame_width, region.frame_height), (81, 79));
        assert!((region.loop_duration() - 0.72).abs() < 1e-5);
    }
}
