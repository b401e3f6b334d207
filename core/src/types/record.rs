use std::fmt;

/// Demographic record for one subject
///
/// Built from the subject's own `<id>.xml` file. `birth_year` is kept as the
/// raw attribute text since the dataset contains malformed years.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct SubjectRecord {
    id: String,
    gender: String,
    birth_year: String,
    race: String,
}

impl SubjectRecord {
    /// Creates a new SubjectRecord
    pub fn new(
        id: impl Into<String>,
        gender: impl Into<String>,
        birth_year: impl Into<String>,
        race: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            gender: gender.into(),
            birth_year: birth_year.into(),
            race: race.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }

    pub fn birth_year(&self) -> &str {
        &self.birth_year
    }

    pub fn race(&self) -> &str {
        &self.race
    }
}

impl fmt::Display for SubjectRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ SubjectRecord | id: {}, gender: {}, birth_year: {}, race: {} }}",
            self.id, self.gender, self.birth_year, self.race
        )
    }
}

/// Acquisition record for one captured image
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ImageRecord {
    /// Subject identifier as stated in the recording
    id: String,

    /// Image location relative to the dataset root, e.g. `dvd2/data/images/...`
    path: String,

    /// FERET pose code (fa, fb, hl, ...)
    pose: String,

    wearing_glasses: bool,
    has_beard: bool,
    has_mustache: bool,
}

impl ImageRecord {
    /// Creates a new ImageRecord
    pub fn new(
        id: impl Into<String>,
        path: impl Into<String>,
        pose: impl Into<String>,
        wearing_glasses: bool,
        has_beard: bool,
        has_mustache: bool,
    ) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            pose: pose.into(),
            wearing_glasses,
            has_beard,
            has_mustache,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn pose(&self) -> &str {
        &self.pose
    }

    pub fn wearing_glasses(&self) -> bool {
        self.wearing_glasses
    }

    pub fn has_beard(&self) -> bool {
        self.has_beard
    }

    pub fn has_mustache(&self) -> bool {
        self.has_mustache
    }
}

impl fmt::Display for ImageRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ ImageRecord | id: {}, pose: {}, glasses: {}, beard: {}, mustache: {}, path: {} }}",
            self.id, self.pose, self.wearing_glasses, self.has_beard, self.has_mustache, self.path
        )
    }
}
