use serde::{Deserialize, Serialize};

/// How a hole score relates to par, as shown on the scoreboard.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreCategory {
    None,
    Eagle,
    Birdie,
    Par,
    Bogey,
    DoubleBogey,
}

impl ScoreCategory {
    /// Unplayed holes (score 0) have no category; anything two or more under
    /// par is an eagle and anything two or more over is a double bogey.
    #[must_use]
    pub fn from_score(score: i32, par: i32) -> Self {
        if score <= 0 {
            return Self::None;
        }
        match score - par {
            d if d <= -2 => Self::Eagle,
            -1 => Self::Birdie,
            0 => Self::Par,
            1 => Self::Bogey,
            _ => Self::DoubleBogey,
        }
    }

    #[must_use]
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Eagle => Some("eagle"),
            Self::Birdie => Some("birdie"),
            Self::Par => Some("par"),
            Self::Bogey => Some("bogey"),
            Self::DoubleBogey => Some("double-bogey"),
        }
    }
}

/// Relative-to-par figure with an explicit `+` when over par; even is `0`.
#[must_use]
pub fn format_to_par(to_par: i32) -> String {
    if to_par > 0 {
        format!("+{to_par}")
    } else {
        to_par.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_relative_to_par() {
        assert_eq!(ScoreCategory::from_score(0, 4), ScoreCategory::None);
        assert_eq!(ScoreCategory::from_score(1, 4), ScoreCategory::Eagle);
        assert_eq!(ScoreCategory::from_score(2, 4), ScoreCategory::Eagle);
        assert_eq!(ScoreCategory::from_score(3, 4), ScoreCategory::Birdie);
        assert_eq!(ScoreCategory::from_score(4, 4), ScoreCategory::Par);
        assert_eq!(ScoreCategory::from_score(5, 4), ScoreCategory::Bogey);
        assert_eq!(ScoreCategory::from_score(9, 4), ScoreCategory::DoubleBogey);
    }

    #[test]
    fn to_par_sign() {
        assert_eq!(format_to_par(3), "+3");
        assert_eq!(format_to_par(0), "0");
        assert_eq!(format_to_par(-18), "-18");
    }
}
