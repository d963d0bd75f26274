use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

// ResponseIntensity: strength and direction of one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ResponseIntensity {
    Like,
    Love,
    Dislike,
    Hate,
}

impl ResponseIntensity {
    pub fn is_positive(self) -> bool {
        matches!(self, Self::Like | Self::Love)
    }

    pub fn is_negative(self) -> bool {
        !self.is_positive()
    }
}

// SwipeDirection: right is positive, left is negative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Intensity for this direction, mild or intensified.
    pub fn intensity(self, intensified: bool) -> ResponseIntensity {
        match (self, intensified) {
            (Self::Right, false) => ResponseIntensity::Like,
            (Self::Right, true) => ResponseIntensity::Love,
            (Self::Left, false) => ResponseIntensity::Dislike,
            (Self::Left, true) => ResponseIntensity::Hate,
        }
    }
}

// ProbeCategory: exactly one probe per category in the default catalog
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProbeCategory {
    SpicePreference,
    DiningStyle,
    FlavorPreference,
    AdventureLevel,
    DiningPace,
    CuisineAsian,
    CuisineMexican,
    CuisineItalian,
    HealthPreference,
    SocialPreference,
}

// PersonalityTag: labels emitted by the deriver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum PersonalityTag {
    #[serde(rename = "Spice Warrior")]
    #[strum(to_string = "Spice Warrior")]
    SpiceWarrior,
    #[serde(rename = "Sweet Tooth")]
    #[strum(to_string = "Sweet Tooth")]
    SweetTooth,
    #[serde(rename = "Street Food Lover")]
    #[strum(to_string = "Street Food Lover")]
    StreetFoodLover,
    #[serde(rename = "Adventure Seeker")]
    #[strum(to_string = "Adventure Seeker")]
    AdventureSeeker,
    #[serde(rename = "Classic Tastes")]
    #[strum(to_string = "Classic Tastes")]
    ClassicTastes,
    #[serde(rename = "Health Conscious")]
    #[strum(to_string = "Health Conscious")]
    HealthConscious,
    #[serde(rename = "Fine Dining")]
    #[strum(to_string = "Fine Dining")]
    FineDining,
    Foodie,
}

/// Ordered, duplicate-free tag list in rule evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PersonalityTagSet(Vec<PersonalityTag>);

impl PersonalityTagSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends `tag` unless it is already present. Returns whether it was added.
    pub fn push(&mut self, tag: PersonalityTag) -> bool {
        if self.0.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    pub fn contains(&self, tag: PersonalityTag) -> bool {
        self.0.contains(&tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PersonalityTag> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[PersonalityTag] {
        &self.0
    }

    pub fn labels(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a PersonalityTagSet {
    type Item = &'a PersonalityTag;
    type IntoIter = std::slice::Iter<'a, PersonalityTag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for PersonalityTagSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let mut set = Self::new();
        for tag in Vec::<PersonalityTag>::deserialize(deserializer)? {
            if !set.push(tag) {
                return Err(serde::de::Error::custom(format!("duplicate tag '{tag}'")));
            }
        }
        Ok(set)
    }
}

// FoodProfileUpdate: what the profile sink receives after derivation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodProfileUpdate {
    pub food_tags: Vec<String>,
    #[serde(default)]
    pub preferred_cuisines: Vec<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
}

impl From<&PersonalityTagSet> for FoodProfileUpdate {
    fn from(tags: &PersonalityTagSet) -> Self {
        Self {
            food_tags: tags.labels(),
            preferred_cuisines: Vec::new(),
            dietary_restrictions: Vec::new(),
        }
    }
}
