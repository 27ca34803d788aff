use glam::Vec2;

/// Gentle horizontal gust, `amplitude * sin(time * frequency)`.
///
/// Meant to be queued as an external force once per fixed step.
#[derive(Clone, Copy, Debug)]
pub struct Wind {
    pub amplitude: f32,
    /// Angular frequency in radians per second.
    pub frequency: f32,
    pub time: f32,
}

impl Default for Wind {
    fn default() -> Self {
        Self {
            amplitude: 5.0,
            frequency: 2.0,
            time: 0.0,
        }
    }
}

impl Wind {
    /// Advance the gust clock by `dt` and return the force for that step.
    pub fn advance(&mut self, dt: f32) -> Vec2 {
        self.time += dt;
        self.force()
    }

    pub fn force(&self) -> Vec2 {
        Vec2::new(self.amplitude * (self.time * self.frequency).sin(), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wind_is_horizontal_and_bounded() {
        let mut wind = Wind::default();
        for _ in 0..600 {
            let f = wind.advance(1.0 / 60.0);
            assert_eq!(f.y, 0.0);
            assert!(f.x.abs() <= wind.amplitude + 1e-6);
        }
    }

    #[test]
    fn test_calm_wind() {
        let mut wind = Wind { amplitude: 0.0, ..Wind::default() };
        assert_eq!(wind.advance(0.5), Vec2::ZERO);
    }
}
