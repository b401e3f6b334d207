use crate::types::{ImageRecord, Inclusion, SubjectRecord};
use log::warn;
use std::collections::BTreeSet;
use std::fmt;

/// Genders accepted when none are configured
pub const DEFAULT_GENDERS: [&str; 2] = ["Male", "Female"];

/// The thirteen FERET pose codes
pub const DEFAULT_POSES: [&str; 13] = [
    "fa", "fb", "pl", "hl", "ql", "pr", "hr", "qr", "ra", "rb", "rc", "rd", "re",
];

/// Inclusion criteria applied while walking the dataset
///
/// Subjects are filtered on gender first; images of accepted subjects are
/// then filtered on pose and the three facial attribute rules. Membership
/// tests are exact, case-sensitive string matches.
///
/// # Example
///
/// ```
/// use feretselect_core::{FilterConfig, Inclusion};
///
/// let filter = FilterConfig::default()
///     .with_genders(["Female"])
///     .with_poses(["fa", "fb"])
///     .with_glasses(Inclusion::No);
///
/// assert!(filter.genders.contains("Female"));
/// assert_eq!(filter.poses.len(), 2);
/// assert_eq!(filter.glasses, Inclusion::No);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterConfig {
    /// Accepted gender values
    pub genders: BTreeSet<String>,

    /// Accepted pose codes
    pub poses: BTreeSet<String>,

    /// Rule for images of subjects wearing glasses
    pub glasses: Inclusion,

    /// Rule for images of subjects with a beard
    pub beard: Inclusion,

    /// Rule for images of subjects with a mustache
    pub mustache: Inclusion,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            genders: DEFAULT_GENDERS.iter().map(|g| g.to_string()).collect(),
            poses: DEFAULT_POSES.iter().map(|p| p.to_string()).collect(),
            glasses: Inclusion::Any,
            beard: Inclusion::Any,
            mustache: Inclusion::Any,
        }
    }
}

impl FilterConfig {
    /// Subject-level predicate: gender must be in the accepted set
    pub fn accept_subject(&self, subject: &SubjectRecord) -> bool {
        self.genders.contains(subject.gender())
    }

    /// Image-level predicate: pose must be accepted and every facial
    /// attribute rule must pass
    pub fn accept_image(&self, image: &ImageRecord) -> bool {
        self.poses.contains(image.pose())
            && self.glasses.accepts(image.wearing_glasses())
            && self.beard.accepts(image.has_beard())
            && self.mustache.accepts(image.has_mustache())
    }

    /// Builder: Set accepted genders
    pub fn with_genders<I, S>(mut self, genders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genders = genders.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: Set accepted pose codes
    pub fn with_poses<I, S>(mut self, poses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.poses = poses.into_iter().map(Into::into).collect();
        self
    }

    /// Builder: Set the glasses rule
    pub fn with_glasses(mut self, inclusion: Inclusion) -> Self {
        self.glasses = inclusion;
        self
    }

    /// Builder: Set the beard rule
    pub fn with_beard(mut self, inclusion: Inclusion) -> Self {
        self.beard = inclusion;
        self
    }

    /// Builder: Set the mustache rule
    pub fn with_mustache(mut self, inclusion: Inclusion) -> Self {
        self.mustache = inclusion;
        self
    }

    /// Sets the glasses rule from text
    ///
    /// Values other than `any`, `yes` or `no` are ignored with a warning and
    /// the previous rule is kept. Returns whether the value was applied.
    ///
    /// ```
    /// use feretselect_core::{FilterConfig, Inclusion};
    ///
    /// let mut filter = FilterConfig::default();
    /// assert!(filter.set_glasses("yes"));
    /// assert!(!filter.set_glasses("maybe"));
    /// assert_eq!(filter.glasses, Inclusion::Yes);
    /// ```
    pub fn set_glasses(&mut self, value: &str) -> bool {
        assign_inclusion(&mut self.glasses, "glasses", value)
    }

    /// Sets the beard rule from text; see [`FilterConfig::set_glasses`]
    pub fn set_beard(&mut self, value: &str) -> bool {
        assign_inclusion(&mut self.beard, "beard", value)
    }

    /// Sets the mustache rule from text; see [`FilterConfig::set_glasses`]
    pub fn set_mustache(&mut self, value: &str) -> bool {
        assign_inclusion(&mut self.mustache, "mustache", value)
    }
}

fn assign_inclusion(slot: &mut Inclusion, field: &str, value: &str) -> bool {
    match value.parse::<Inclusion>() {
        Ok(inclusion) => {
            *slot = inclusion;
            true
        }
        Err(e) => {
            warn!("{}; keeping {} = {}", e, field, slot);
            false
        }
    }
}

impl fmt::Display for FilterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |set: &BTreeSet<String>| set.iter().cloned().collect::<Vec<_>>().join(",");
        write!(
            f,
            "{{ FilterConfig | genders: [{}], poses: [{}], glasses: {}, beard: {}, mustache: {} }}",
            join(&self.genders),
            join(&self.poses),
            self.glasses,
            self.beard,
            self.mustache
        )
    }
}
