use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Orbital subshell letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subshell {
    S,
    P,
    D,
    F,
}

impl Subshell {
    pub fn letter(&self) -> char {
        match self {
            Subshell::S => 's',
            Subshell::P => 'p',
            Subshell::D => 'd',
            Subshell::F => 'f',
        }
    }

    /// Maximum number of electrons the subshell holds.
    pub fn capacity(&self) -> u8 {
        match self {
            Subshell::S => 2,
            Subshell::P => 6,
            Subshell::D => 10,
            Subshell::F => 14,
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            's' => Some(Subshell::S),
            'p' => Some(Subshell::P),
            'd' => Some(Subshell::D),
            'f' => Some(Subshell::F),
            _ => None,
        }
    }
}

/// A single term of an electron configuration, such as `3d6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OrbitalTerm {
    pub shell: u8,
    pub subshell: Subshell,
    pub occupancy: u8,
}

impl OrbitalTerm {
    pub fn new(shell: u8, subshell: Subshell, occupancy: u8) -> Self {
        Self {
            shell,
            subshell,
            occupancy,
        }
    }

    pub fn is_full(&self) -> bool {
        self.occupancy == self.subshell.capacity()
    }
}

impl fmt::Display for OrbitalTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.shell, self.subshell.letter(), self.occupancy)
    }
}

impl Serialize for OrbitalTerm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid orbital term: '{0}'")]
pub struct ParseOrbitalError(pub String);

impl FromStr for OrbitalTerm {
    type Err = ParseOrbitalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseOrbitalError(s.to_string());
        let trimmed = s.trim();
        let letter_pos = trimmed
            .find(|c: char| c.is_ascii_alphabetic())
            .ok_or_else(err)?;
        let (shell, rest) = trimmed.split_at(letter_pos);
        let mut rest_chars = rest.chars();
        let subshell = rest_chars
            .next()
            .and_then(Subshell::from_letter)
            .ok_or_else(err)?;
        let shell: u8 = shell.parse().map_err(|_| err())?;
        let occupancy: u8 = rest_chars.as_str().parse().map_err(|_| err())?;
        if shell == 0 || occupancy == 0 || occupancy > subshell.capacity() {
            return Err(err());
        }
        Ok(Self::new(shell, subshell, occupancy))
    }
}

/// The full ground-state electron configuration, lowest to highest energy.
///
/// Never empty for a derived element: the first row always contributes an
/// `s` term.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ElectronConfiguration {
    terms: Vec<OrbitalTerm>,
}

impl ElectronConfiguration {
    pub fn new(terms: Vec<OrbitalTerm>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[OrbitalTerm] {
        &self.terms
    }

    /// The last emitted term, i.e. the highest occupied orbital.
    pub fn highest_occupied(&self) -> Option<&OrbitalTerm> {
        self.terms.last()
    }

    pub fn total_electrons(&self) -> u32 {
        self.terms.iter().map(|t| u32::from(t.occupancy)).sum()
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrbitalTerm> {
        self.terms.iter()
    }
}

impl fmt::Display for ElectronConfiguration {
    /// Renders the long notation: terms of one energy run are joined with `-`,
    /// and a space follows every `p` term and the closed `1s2` shell, e.g.
    /// `1s2 2s2-2p6 3s2-3p6 4s2-3d6`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = String::new();
        for term in &self.terms {
            rendered.push_str(&term.to_string());
            let breaks_run = term.subshell == Subshell::P
                || (term.shell == 1 && term.subshell == Subshell::S && term.occupancy == 2);
            rendered.push(if breaks_run { ' ' } else { '-' });
        }
        f.write_str(rendered.trim_end_matches(['-', ' ']))
    }
}

impl Serialize for ElectronConfiguration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.terms.iter())
    }
}

/// Noble-gas abbreviated configuration, e.g. `[Ar] 4s2 3d6`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AbbreviatedConfiguration {
    core: Option<String>,
    terms: Vec<OrbitalTerm>,
}

impl AbbreviatedConfiguration {
    pub fn new(core: Option<String>, terms: Vec<OrbitalTerm>) -> Self {
        Self { core, terms }
    }

    /// Symbol of the noble gas closing the previous period; `None` in period 1.
    pub fn core(&self) -> Option<&str> {
        self.core.as_deref()
    }

    pub fn terms(&self) -> &[OrbitalTerm] {
        &self.terms
    }
}

impl fmt::Display for AbbreviatedConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::with_capacity(self.terms.len() + 1);
        if let Some(core) = &self.core {
            parts.push(format!("[{}]", core));
        }
        parts.extend(self.terms.iter().map(ToString::to_string));
        f.write_str(&parts.join(" "))
    }
}

impl Serialize for AbbreviatedConfiguration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
