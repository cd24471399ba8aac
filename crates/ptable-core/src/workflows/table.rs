use crate::core::data::seed::{SeedTable, TOTAL_ELEMENT_COUNT};
use crate::core::models::column::Column;
use crate::core::models::element::ElementDescriptor;
use crate::core::models::family::Family;
use crate::engine::config::{SeedSource, TableConfig};
use crate::engine::descriptor::{derive, verify};
use crate::engine::error::EngineError;
use crate::engine::resolver::{ElementKey, resolve};
use once_cell::sync::OnceCell;
use tracing::{info, instrument};

static BUILTIN_TABLE: OnceCell<PeriodicTable> = OnceCell::new();

/// All 118 derived element descriptors, built once and read-only afterwards.
///
/// Construction derives every element up front, so a table that exists is a
/// table whose every descriptor satisfied the derivation rules. Lookups never
/// derive again and never fail for a valid key.
#[derive(Debug, Clone)]
pub struct PeriodicTable {
    seeds: SeedTable,
    elements: Vec<ElementDescriptor>,
}

impl PeriodicTable {
    #[instrument(skip_all, name = "periodic_table_build")]
    pub fn new(config: &TableConfig) -> Result<Self, EngineError> {
        let seeds = match &config.seed_source {
            SeedSource::Builtin => SeedTable::builtin()?,
            SeedSource::File(path) => SeedTable::load(path)?,
        };
        let table = Self::from_seeds(seeds, config.verify)?;
        info!("Derived {} element descriptors.", table.elements.len());
        Ok(table)
    }

    /// Builds the table from the seed rows bundled with the crate.
    pub fn builtin() -> Result<Self, EngineError> {
        Self::new(&TableConfig::default())
    }

    /// A process-wide table built from the bundled seed rows on first use.
    pub fn global() -> Result<&'static Self, EngineError> {
        BUILTIN_TABLE.get_or_try_init(Self::builtin)
    }

    pub fn from_seeds(seeds: SeedTable, verify_each: bool) -> Result<Self, EngineError> {
        let mut elements = Vec::with_capacity(TOTAL_ELEMENT_COUNT as usize);
        for atomic_number in 1..=TOTAL_ELEMENT_COUNT {
            let descriptor = derive(&seeds, atomic_number)?;
            elements.push(Self::admit(descriptor, verify_each)?);
        }
        Ok(Self { seeds, elements })
    }

    /// Gate every derived descriptor passes before it joins the table.
    fn admit(
        descriptor: ElementDescriptor,
        verify_each: bool,
    ) -> Result<ElementDescriptor, EngineError> {
        if verify_each {
            verify(&descriptor)?;
        }
        Ok(descriptor)
    }

    /// Looks up one element by atomic number, symbol, or name.
    ///
    /// ```
    /// use ptable::workflows::table::PeriodicTable;
    ///
    /// let table = PeriodicTable::builtin().unwrap();
    /// assert_eq!(table.lookup("Fe").unwrap().atomic_number(), 26);
    /// assert_eq!(table.lookup(26u32).unwrap().name(), "iron");
    /// assert!(table.lookup("Unobtainium").is_err());
    /// ```
    pub fn lookup(&self, key: impl Into<ElementKey>) -> Result<&ElementDescriptor, EngineError> {
        let key = key.into();
        let seed = resolve(&self.seeds, &key)?;
        self.get(seed.atomic_number)
            .ok_or_else(|| EngineError::InvalidKey(format!("no element matches {}", key)))
    }

    pub fn get(&self, atomic_number: u32) -> Option<&ElementDescriptor> {
        if atomic_number == 0 {
            return None;
        }
        self.elements.get(atomic_number as usize - 1)
    }

    /// Every element in ascending atomic-number order.
    pub fn all_elements(&self) -> &[ElementDescriptor] {
        &self.elements
    }

    pub fn elements_where<P>(&self, predicate: P) -> Vec<&ElementDescriptor>
    where
        P: Fn(&ElementDescriptor) -> bool,
    {
        self.elements.iter().filter(|e| predicate(e)).collect()
    }

    pub fn family(&self, family: Family) -> Vec<&ElementDescriptor> {
        self.elements_where(|e| e.family() == family)
    }

    pub fn in_period(&self, period: u8) -> Vec<&ElementDescriptor> {
        self.elements_where(|e| e.period() == period)
    }

    /// Every element except the lanthanides and actinides.
    pub fn without_inner_transition_metals(&self) -> Vec<&ElementDescriptor> {
        self.elements_where(|e| !e.is_inner_transition_metal())
    }

    pub fn columns() -> &'static [Column] {
        &Column::ALL
    }

    pub fn families() -> &'static [Family] {
        &Family::ALL
    }

    pub fn seeds(&self) -> &SeedTable {
        &self.seeds
    }
}
