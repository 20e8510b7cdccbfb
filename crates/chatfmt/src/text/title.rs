//! On-screen titles.

use super::Text;

/// Fade and display durations of a title, in ticks.
///
/// Unset values leave the choice to the receiver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TitleTimes {
    pub fade_in: Option<u32>,
    pub stay: Option<u32>,
    pub fade_out: Option<u32>,
}

impl TitleTimes {
    /// Explicit durations.
    pub fn new(fade_in: Option<u32>, stay: Option<u32>, fade_out: Option<u32>) -> Self {
        Self {
            fade_in,
            stay,
            fade_out,
        }
    }

    /// Uses one duration for fading in, staying and fading out.
    pub fn uniform(ticks: u32) -> Self {
        Self::new(Some(ticks), Some(ticks), Some(ticks))
    }

    /// Same fade on both ends.
    pub fn fade(fade: u32, stay: u32) -> Self {
        Self::new(Some(fade), Some(stay), Some(fade))
    }
}

/// A main title with an optional subtitle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Title {
    pub title: Option<Text>,
    pub subtitle: Option<Text>,
    pub times: TitleTimes,
}

impl Title {
    /// Creates a title without a subtitle.
    pub fn new(title: Text) -> Self {
        Self {
            title: Some(title),
            subtitle: None,
            times: TitleTimes::default(),
        }
    }

    /// Sets the subtitle.
    pub fn subtitle(mut self, subtitle: Text) -> Self {
        self.subtitle = Some(subtitle);
        self
    }

    /// Sets the durations.
    pub fn times(mut self, times: TitleTimes) -> Self {
        self.times = times;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_mirrors_ends() {
        let times = TitleTimes::fade(10, 40);
        assert_eq!(times.fade_in, Some(10));
        assert_eq!(times.stay, Some(40));
        assert_eq!(times.fade_out, Some(10));
    }

    #[test]
    fn test_default_times_unset() {
        let title = Title::new(Text::new("Welcome"));
        assert_eq!(title.times, TitleTimes::default());
        assert!(title.subtitle.is_none());
    }
}
