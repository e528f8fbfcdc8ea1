use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Named lucky/unlucky token tables. Applying one replaces the token sets of a
/// [`crate::config::ScoringConfig`].
#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CulturalPreset {
    None,
    EastAsia,
    China,
    Korea,
    Vietnam,
    Japan,
    India,
    IndiaSouth,
    Afghanistan,
    Bulgaria,
    Italy,
    SpainGreece,
    Western,
    Ethiopia,
    Global,
    Germany,
    SpainMexico,
    Norway,
    Catholic,
    Russia,
}

impl CulturalPreset {
    pub fn lucky_tokens(&self) -> &'static [&'static str] {
        match self {
            Self::EastAsia | Self::China | Self::Korea | Self::Vietnam => &["6", "8", "9"],
            Self::Japan | Self::Western | Self::Ethiopia => &["7"],
            Self::IndiaSouth => &["3"],
            Self::Italy => &["13"],
            Self::Global => &["3", "7", "8", "9", "13", "15", "39", "666"],
            Self::Germany => &["4"],
            Self::SpainMexico => &["15", "3"],
            Self::Norway => &["9"],
            Self::Catholic => &["39", "3"],
            Self::None
            | Self::India
            | Self::Afghanistan
            | Self::Bulgaria
            | Self::SpainGreece
            | Self::Russia => &[],
        }
    }

    pub fn unlucky_tokens(&self) -> &'static [&'static str] {
        match self {
            Self::EastAsia | Self::China | Self::Korea | Self::Vietnam => &["4"],
            Self::Japan => &["9", "43"],
            Self::India => &["8", "26"],
            Self::IndiaSouth => &["8"],
            Self::Afghanistan => &["39"],
            // Longer than any scorable number, so it never matches.
            Self::Bulgaria => &["08888888888"],
            Self::Italy => &["17"],
            Self::SpainGreece => &["13"],
            Self::Western | Self::Ethiopia => &["13", "666"],
            Self::Global => &["4", "7", "8", "9", "13", "39", "666"],
            Self::Catholic => &["666"],
            Self::None
            | Self::Germany
            | Self::SpainMexico
            | Self::Norway
            | Self::Russia => &[],
        }
    }

    pub fn notes(&self) -> &'static str {
        match self {
            Self::None => "No cultural weighting applied (pure pattern scoring).",
            Self::EastAsia => "East Asia: 6/8/9 auspicious; 4 inauspicious.",
            Self::China => "China: 6/8/9 auspicious; 4 (death) unlucky.",
            Self::Korea => "Korea: 6/8/9 positive; 4 sometimes avoided.",
            Self::Vietnam => "Vietnam: Chinese-influenced; 8/9 lucky; 4 unlucky.",
            Self::Japan => "Japan: 7 lucky; 9 (suffering) and 43 avoided.",
            Self::India => "India: 8 and 26 considered inauspicious in some contexts.",
            Self::IndiaSouth => "South India: 8 linked to Sani; 3 sometimes positive.",
            Self::Afghanistan => "Afghanistan: 39 has a negative slang association.",
            Self::Bulgaria => "Bulgaria: 0888 888 888 is considered cursed (folklore).",
            Self::Italy => "Italy: 13 lucky ('fare tredici'); 17 unlucky.",
            Self::SpainGreece => "Spain & Greece: 13 considered unlucky.",
            Self::Western => "Western: 7 lucky; 13 and 666 unlucky.",
            Self::Ethiopia => "Ethiopia: 7 often favorable; 13/666 negative in some contexts.",
            Self::Global => "Global mix sampled across regions.",
            Self::Germany => "Germany: 4 associated with the four-leaf clover.",
            Self::SpainMexico => "Spain & Mexico: 15 often considered lucky.",
            Self::Norway => "Norway: 9 has Norse sacred connotations.",
            Self::Catholic => "Catholic contexts: 39/3 positive; 666 negative.",
            Self::Russia => "Russia: beliefs vary; kept neutral.",
        }
    }
}

pub fn all_presets() -> Vec<CulturalPreset> {
    CulturalPreset::iter().collect()
}
