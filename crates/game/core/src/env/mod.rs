//! Traits describing read-only game data.
//!
//! Oracles expose the job and Minor Work catalogs and the dice. The [`Env`]
//! aggregate bundles them so the engine can reach everything it needs without
//! hard coupling to concrete implementations.
mod catalog;
mod error;
mod rng;
mod snapshot;

pub use catalog::{CatalogOracle, JobDefinition};
pub use error::OracleError;
pub use rng::{PcgRng, RngOracle, RollPurpose, compute_seed};
pub use snapshot::CatalogSnapshot;

/// Aggregates read-only oracles required by the reducer and action pipeline.
pub struct Env<'a, C, R>
where
    C: CatalogOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    catalog: Option<&'a C>,
    rng: Option<&'a R>,
}

// Trait-object oracles are not `Clone`; only the references are copied.
impl<C, R> Clone for Env<'_, C, R>
where
    C: CatalogOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, R> Copy for Env<'_, C, R>
where
    C: CatalogOracle + ?Sized,
    R: RngOracle + ?Sized,
{
}

pub type GameEnv<'a> = Env<'a, dyn CatalogOracle + 'a, dyn RngOracle + 'a>;

impl<'a, C, R> Env<'a, C, R>
where
    C: CatalogOracle + ?Sized,
    R: RngOracle + ?Sized,
{
    pub fn new(catalog: Option<&'a C>, rng: Option<&'a R>) -> Self {
        Self { catalog, rng }
    }

    pub fn with_all(catalog: &'a C, rng: &'a R) -> Self {
        Self::new(Some(catalog), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            catalog: None,
            rng: None,
        }
    }

    /// Returns the CatalogOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::CatalogNotAvailable` if no catalog oracle was provided.
    pub fn catalog(&self) -> Result<&'a C, OracleError> {
        self.catalog.ok_or(OracleError::CatalogNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::RngNotAvailable` if no rng oracle was provided.
    pub fn rng(&self) -> Result<&'a R, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}

impl<'a, C, R> Env<'a, C, R>
where
    C: CatalogOracle + 'a,
    R: RngOracle + 'a,
{
    /// Converts this environment into a trait-object based `GameEnv` (consumes self).
    pub fn into_game_env(self) -> GameEnv<'a> {
        self.as_game_env()
    }

    /// Converts this environment into a trait-object based `GameEnv` (borrows self).
    pub fn as_game_env(&self) -> GameEnv<'a> {
        let catalog: Option<&'a dyn CatalogOracle> = self.catalog.map(|catalog| catalog as _);
        let rng: Option<&'a dyn RngOracle> = self.rng.map(|rng| rng as _);
        Env::new(catalog, rng)
    }
}
