// src/services/id_generator.rs - Named identifier shapes
use log::error;

use crate::errors::EntropyError;
use crate::models::{Alphabet, IdShape};
use crate::utils::id_generator::format;
use crate::utils::random::{ByteSource, OsByteSource};

type Result<T> = std::result::Result<T, EntropyError>;

/// Length of a default identifier
pub const DEFAULT_SIZE: usize = 21;
/// Length of a short identifier
pub const SHORT_SIZE: usize = 14;
pub const WEB_SAFE_GROUPS: usize = 4;
pub const WEB_SAFE_GROUP_SIZE: usize = 4;
pub const WEB_SAFE_SEPARATOR: &str = "-";

/// Produces identifiers of the supported shapes from a single byte source.
///
/// The generator holds no state besides the source, so one instance can be
/// shared freely between threads when the source allows it.
#[derive(Debug, Clone)]
pub struct IdGenerator<S: ByteSource = OsByteSource> {
    source: S,
}

impl Default for IdGenerator<OsByteSource> {
    fn default() -> Self {
        Self::new(OsByteSource)
    }
}

impl<S: ByteSource> IdGenerator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Generates `size` symbols drawn uniformly from `alphabet`
    pub fn generate_string(&self, alphabet: &Alphabet, size: usize) -> Result<String> {
        format(&self.source, alphabet, size)
    }

    /// Generates a 21-character identifier whose first character is a letter.
    ///
    /// The first character comes from the default alphabet with its leading
    /// digits and punctuation removed, the other 20 from the full default
    /// alphabet.
    ///
    /// A failure while drawing the first character is only logged. The
    /// returned result reflects the draw of the remaining 20 characters, so
    /// an `Ok` may hold a 20-character identifier if the first draw failed.
    ///
    /// ### Errors
    /// * `EntropyError` - If drawing the remaining characters fails
    pub fn new_id(&self) -> Result<String> {
        let (id, rest) = self.default_id_parts();
        rest.map(|_| id)
    }

    /// Like [`IdGenerator::new_id`] but never fails.
    ///
    /// Errors are logged and whatever was produced is returned, which is an
    /// empty string when the byte source fails outright.
    pub fn new_id_must(&self) -> String {
        let (id, rest) = self.default_id_parts();
        if let Err(e) = rest {
            error!("Error creating identifier: {}", e);
        }
        id
    }

    /// Generates a 14-character identifier from the default alphabet
    pub fn new_short_id(&self) -> Result<String> {
        self.generate_string(&Alphabet::url_safe(), SHORT_SIZE)
    }

    /// Generates a 19-character `xxxx-xxxx-xxxx-xxxx` identifier usable as an
    /// HTML element id.
    ///
    /// Best effort: a failed draw is logged and its part left empty.
    pub fn new_web_safe_id(&self) -> String {
        let groups: Vec<String> = (0..WEB_SAFE_GROUPS)
            .map(|_| {
                let mut group = String::with_capacity(WEB_SAFE_GROUP_SIZE);
                match self.generate_string(&Alphabet::alpha_only(), 1) {
                    Ok(first) => group.push_str(&first),
                    Err(e) => error!("Error creating web-safe identifier: {}", e),
                }
                match self.generate_string(&Alphabet::alpha_numeric(), WEB_SAFE_GROUP_SIZE - 1) {
                    Ok(rest) => group.push_str(&rest),
                    Err(e) => error!("Error creating web-safe identifier: {}", e),
                }
                group
            })
            .collect();

        groups.join(WEB_SAFE_SEPARATOR)
    }

    /// Strict variant of [`IdGenerator::new_web_safe_id`]
    ///
    /// ### Errors
    /// * `EntropyError` - The first failed draw, unchanged
    pub fn try_new_web_safe_id(&self) -> Result<String> {
        let groups = (0..WEB_SAFE_GROUPS)
            .map(|_| {
                let first = self.generate_string(&Alphabet::alpha_only(), 1)?;
                let rest = self.generate_string(&Alphabet::alpha_numeric(), WEB_SAFE_GROUP_SIZE - 1)?;
                Ok(first + &rest)
            })
            .collect::<Result<Vec<String>>>()?;

        Ok(groups.join(WEB_SAFE_SEPARATOR))
    }

    /// Generates one identifier of the given shape, failing loudly
    pub fn generate_shape(&self, shape: &IdShape) -> Result<String> {
        match shape {
            IdShape::Default => self.new_id(),
            IdShape::Short => self.new_short_id(),
            IdShape::WebSafe => self.try_new_web_safe_id(),
            IdShape::Custom { alphabet, size } => self.generate_string(alphabet, *size),
        }
    }

    // Letters-only first character, then the rest from the full default alphabet.
    // Only the second draw's outcome is reported.
    fn default_id_parts(&self) -> (String, Result<()>) {
        let mut id = String::with_capacity(DEFAULT_SIZE);

        match self.generate_string(&Alphabet::alpha_only(), 1) {
            Ok(first) => id.push_str(&first),
            Err(e) => error!("Error creating identifier: {}", e),
        }

        let rest = self
            .generate_string(&Alphabet::url_safe(), DEFAULT_SIZE - 1)
            .map(|rest| id.push_str(&rest));

        (id, rest)
    }
}

/// Generates `size` symbols from `alphabet` with the system random source
pub fn generate_string(alphabet: &Alphabet, size: usize) -> Result<String> {
    IdGenerator::new(OsByteSource).generate_string(alphabet, size)
}

/// See [`IdGenerator::new_id`]
pub fn new_id() -> Result<String> {
    IdGenerator::new(OsByteSource).new_id()
}

/// See [`IdGenerator::new_id_must`]
pub fn new_id_must() -> String {
    IdGenerator::new(OsByteSource).new_id_must()
}

/// See [`IdGenerator::new_short_id`]
pub fn new_short_id() -> Result<String> {
    IdGenerator::new(OsByteSource).new_short_id()
}

/// See [`IdGenerator::new_web_safe_id`]
pub fn new_web_safe_id() -> String {
    IdGenerator::new(OsByteSource).new_web_safe_id()
}

/// See [`IdGenerator::try_new_web_safe_id`]
pub fn try_new_web_safe_id() -> Result<String> {
    IdGenerator::new(OsByteSource).try_new_web_safe_id()
}
