//! Multiplier factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::fft_based::{FftMultiplier, RecursiveFftMultiplier};
use crate::multiplier::{Multiplier, PolyError, PolyMultiplier};
use crate::schoolbook::SchoolbookMultiplier;

/// Factory trait for creating multipliers.
pub trait MultiplierFactory: Send + Sync {
    /// Get or create a multiplier by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier>, PolyError>;

    /// List all available multiplier names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Multiplier>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_multiplier(name: &str) -> Result<Arc<dyn Multiplier>, PolyError> {
        match name {
            "fft" => Ok(Arc::new(PolyMultiplier::new(Arc::new(FftMultiplier::new())))),
            "fft-recursive" | "recursive" => Ok(Arc::new(PolyMultiplier::new(Arc::new(
                RecursiveFftMultiplier::new(),
            )))),
            "schoolbook" | "naive" => Ok(Arc::new(PolyMultiplier::new(Arc::new(
                SchoolbookMultiplier::new(),
            )))),
            _ => Err(PolyError::Config(format!("unknown multiplier: {name}"))),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiplierFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier>, PolyError> {
        // Check cache first
        if let Some(mult) = self.cache.read().get(name) {
            return Ok(Arc::clone(mult));
        }

        // Create and cache
        let mult = Self::create_multiplier(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&mult));
        Ok(mult)
    }

    fn available(&self) -> Vec<&str> {
        vec!["fft", "fft-recursive", "schoolbook"]
    }
}
