//! Solver registry mapping puzzle identifiers to unit factories

use crate::error::{RegistrationError, SolverError};
use crate::id::PuzzleId;
use crate::instance::{PuzzleUnit, SolverInstance};
use crate::solver::Solver;
use std::collections::BTreeMap;

/// Factory producing a fresh unit on every call
pub type UnitFactory = Box<dyn Fn() -> Box<dyn PuzzleUnit> + Send + Sync>;

/// Metadata about a registered factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub id: PuzzleId,
    /// Number of parts the unit exposes
    pub parts: u8,
}

struct FactoryEntry {
    factory: UnitFactory,
    parts: u8,
}

/// Builder for constructing a [`SolverRegistry`]
///
/// Registration is the only way to add entries and it rejects duplicates, so
/// the order solvers are registered in never matters.
///
/// # Example
///
/// ```
/// use aoc_solver::{Answer, AocParser, InputSet, ParseError, RegistryBuilder, SolveError, Solver};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type Parsed<'a> = &'a str;
///
///     fn parse(input: &InputSet) -> Result<Self::Parsed<'_>, ParseError> {
///         input.first().map(String::as_str).ok_or(ParseError::MissingData("line".into()))
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(parsed: &Self::Parsed<'_>, _part: u8) -> Result<Answer, SolveError> {
///         Ok((*parsed).into())
///     }
/// }
///
/// let registry = RegistryBuilder::new()
///     .register_solver::<Echo>(2018, 1)
///     .unwrap()
///     .build();
///
/// let id = aoc_solver::PuzzleId::new(2018, 1).unwrap();
/// let unit = registry.resolve(id).unwrap();
/// let answer = unit.solve(1, &InputSet::from_text("hello\n")).unwrap();
/// assert_eq!(answer.to_string(), "hello");
/// ```
pub struct RegistryBuilder {
    entries: BTreeMap<PuzzleId, FactoryEntry>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register a unit factory for a specific year and day
    ///
    /// One unit is built up front; its `parts()` must equal `parts`.
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the factory registered, ready for chaining
    /// * `Err(RegistrationError)` - Invalid year/day, no parts, mismatched parts, or a duplicate
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: Fn() -> Box<dyn PuzzleUnit> + Send + Sync + 'static,
    {
        let id = PuzzleId::new(year, day)?;
        if parts == 0 {
            return Err(RegistrationError::NoParts(id));
        }
        if self.entries.contains_key(&id) {
            return Err(RegistrationError::Duplicate(id));
        }
        let built = factory().parts();
        if built != parts {
            return Err(RegistrationError::PartsMismatch {
                id,
                declared: parts,
                built,
            });
        }

        tracing::debug!(%id, parts, "registered solver");
        self.entries.insert(
            id,
            FactoryEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register a [`Solver`] type for a specific year and day
    pub fn register_solver<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        let id = PuzzleId::new(year, day)?;
        self.register(year, day, S::PARTS, move || {
            Box::new(SolverInstance::<S>::new(id)) as Box<dyn PuzzleUnit>
        })
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!`.
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// ```ignore
    /// // Register only solvers tagged as "easy"
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"easy"))?
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder into an immutable registry
    pub fn build(self) -> SolverRegistry {
        tracing::debug!(solvers = self.entries.len(), "registry built");
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable table of unit factories, keyed and iterated in identifier order
pub struct SolverRegistry {
    entries: BTreeMap<PuzzleId, FactoryEntry>,
}

impl SolverRegistry {
    /// Construct a fresh unit for `id`
    pub fn resolve(&self, id: PuzzleId) -> Result<Box<dyn PuzzleUnit>, SolverError> {
        let entry = self.entries.get(&id).ok_or(SolverError::NotRegistered(id))?;
        Ok((entry.factory)())
    }

    pub fn info(&self, id: PuzzleId) -> Option<FactoryInfo> {
        self.entries.get(&id).map(|e| FactoryInfo { id, parts: e.parts })
    }

    /// Metadata of every registered unit in ascending identifier order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries
            .iter()
            .map(|(id, e)| FactoryInfo { id: *id, parts: e.parts })
    }

    pub fn contains(&self, id: PuzzleId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// Object safe, so differently typed solvers can sit side by side in
/// [`SolverPlugin`]. Every [`Solver`] gets it through a blanket impl.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(year, day)
    }
}

/// Plugin record for automatic solver registration
///
/// Usually emitted by `#[derive(AutoRegisterSolver)]`; can also be submitted
/// by hand:
///
/// ```ignore
/// inventory::submit! {
///     SolverPlugin { year: 2018, day: 1, solver: &Day1, tags: &["easy"] }
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Tags for filtering (e.g. "easy", "grid", "parsing")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);
