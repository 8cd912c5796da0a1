//! Variant registry
//!
//! Holds every known board variant and the single active one. Selection is a
//! one-way transition from [`RegistryState::Unselected`] to
//! [`RegistryState::Selected`]; afterwards the active variant is read without
//! locking from any context.

use lazyinit::LazyInit;
use log::{error, info, warn};

use crate::boards;
use crate::variant::error::RegistryError;
use crate::variant::validate;
use crate::variant::{BoardVariant, HardwareModel};

/// Lifecycle of the active variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    Unselected,
    Selected(HardwareModel),
}

/// Known variants plus the single-assignment active slot
pub struct VariantRegistry {
    variants: &'static [&'static BoardVariant],
    active: LazyInit<&'static BoardVariant>,
}

impl VariantRegistry {
    pub const fn new(variants: &'static [&'static BoardVariant]) -> Self {
        Self {
            variants,
            active: LazyInit::new(),
        }
    }

    pub fn variants(&self) -> &'static [&'static BoardVariant] {
        self.variants
    }

    /// Registered variant for `hardware`
    pub fn find(&self, hardware: HardwareModel) -> Result<&'static BoardVariant, RegistryError> {
        self.variants
            .iter()
            .copied()
            .find(|variant| variant.hardware == hardware)
            .ok_or(RegistryError::UnknownHardware(hardware))
    }

    /// Self-check over every registered variant, not just the active one
    pub fn validate_all(&self) -> Result<(), RegistryError> {
        for (i, variant) in self.variants.iter().enumerate() {
            if self.variants[..i]
                .iter()
                .any(|earlier| earlier.hardware == variant.hardware)
            {
                return Err(RegistryError::DuplicateHardwareId(variant.hardware));
            }

            variant.validate().map_err(|error| {
                error!("{}: {}", variant.name, error);
                RegistryError::InvalidVariant {
                    hardware: variant.hardware,
                    error,
                }
            })?;
        }
        Ok(())
    }

    /// Make `hardware` the active variant
    ///
    /// Succeeds once. The variant is validated first; an invalid variant is
    /// never selected.
    pub fn select_variant(
        &self,
        hardware: HardwareModel,
    ) -> Result<&'static BoardVariant, RegistryError> {
        if let Some(active) = self.active.get() {
            return Err(RegistryError::AlreadySelected(active.hardware));
        }

        let variant = self.find(hardware)?;
        variant
            .validate()
            .map_err(|error| RegistryError::InvalidVariant { hardware, error })?;

        for default in validate::router_advisories(variant) {
            warn!(
                "{}: router {} of {}s is shorter than the client default",
                variant.name,
                default.name(),
                variant.protocol.get(default)
            );
        }

        match self.active.call_once(|| variant) {
            Some(selected) => {
                info!(
                    "selected board {} ({}), fingerprint {:04x}",
                    selected.name,
                    selected.hardware.name(),
                    selected.fingerprint()
                );
                Ok(*selected)
            }
            None => Err(RegistryError::AlreadySelected(
                self.active.get().map_or(hardware, |active| active.hardware),
            )),
        }
    }

    /// The active variant; fails until a variant has been selected
    pub fn active_variant(&self) -> Result<&'static BoardVariant, RegistryError> {
        self.active
            .get()
            .copied()
            .ok_or(RegistryError::RegistryNotSelected)
    }

    pub fn state(&self) -> RegistryState {
        match self.active.get() {
            Some(active) => RegistryState::Selected(active.hardware),
            None => RegistryState::Unselected,
        }
    }
}

/// Process-wide registry over every supported board
pub static REGISTRY: VariantRegistry = VariantRegistry::new(boards::ALL);

/// Select the variant chosen by the build's `board-*` feature
pub fn select_build_variant() -> Result<&'static BoardVariant, RegistryError> {
    let hardware = boards::BUILD_SELECTION.ok_or(RegistryError::NoBuildSelection)?;
    REGISTRY.select_variant(hardware)
}

/// The process-wide active variant
pub fn active_variant() -> Result<&'static BoardVariant, RegistryError> {
    REGISTRY.active_variant()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::boards::{heltec_v3, ttgo_t22_v1_1};
    use crate::variant::{ConfigError, Signal};

    static TWO_BOARDS: [&BoardVariant; 2] = [&ttgo_t22_v1_1::VARIANT, &heltec_v3::VARIANT];

    #[test]
    fn test_unselected_read_fails() {
        let registry = VariantRegistry::new(&TWO_BOARDS);

        assert_eq!(registry.state(), RegistryState::Unselected);
        assert_eq!(
            registry.active_variant(),
            Err(RegistryError::RegistryNotSelected)
        );
    }

    #[test]
    fn test_select_then_read() {
        let registry = VariantRegistry::new(&TWO_BOARDS);

        let selected = registry.select_variant(HardwareModel::TBeam).unwrap();
        assert_eq!(selected.hardware, HardwareModel::TBeam);
        assert_eq!(registry.state(), RegistryState::Selected(HardwareModel::TBeam));

        let first = registry.active_variant().unwrap();
        let second = registry.active_variant().unwrap();
        assert!(core::ptr::eq(first, second));
        assert_eq!(*first, *second);
        assert_eq!(first.fingerprint(), second.fingerprint());
    }

    #[test]
    fn test_selection_is_single_assignment() {
        let registry = VariantRegistry::new(&TWO_BOARDS);

        registry.select_variant(HardwareModel::TBeam).unwrap();
        assert_eq!(
            registry.select_variant(HardwareModel::HeltecV3),
            Err(RegistryError::AlreadySelected(HardwareModel::TBeam))
        );
        assert_eq!(
            registry.active_variant().unwrap().hardware,
            HardwareModel::TBeam
        );
    }

    #[test]
    fn test_unknown_hardware() {
        let registry = VariantRegistry::new(&TWO_BOARDS);

        assert_eq!(
            registry.select_variant(HardwareModel::TEcho),
            Err(RegistryError::UnknownHardware(HardwareModel::TEcho))
        );
        assert_eq!(registry.state(), RegistryState::Unselected);
    }

    #[test]
    fn test_invalid_variant_is_never_selected() {
        const BROKEN: BoardVariant = BoardVariant {
            pins: crate::variant::PinTable::new(&[]),
            ..ttgo_t22_v1_1::VARIANT
        };
        static BROKEN_ONLY: [&BoardVariant; 1] = [&BROKEN];
        let registry = VariantRegistry::new(&BROKEN_ONLY);

        assert!(matches!(
            registry.select_variant(HardwareModel::TBeam),
            Err(RegistryError::InvalidVariant { .. })
        ));
        assert!(matches!(
            registry.validate_all(),
            Err(RegistryError::InvalidVariant {
                hardware: HardwareModel::TBeam,
                error: ConfigError::MissingCapabilityField { .. },
            })
        ));
        assert_eq!(registry.state(), RegistryState::Unselected);
    }

    #[test]
    fn test_duplicate_hardware_id() {
        static DUPLICATED: [&BoardVariant; 2] =
            [&ttgo_t22_v1_1::VARIANT, &ttgo_t22_v1_1::VARIANT];
        let registry = VariantRegistry::new(&DUPLICATED);

        assert_eq!(
            registry.validate_all(),
            Err(RegistryError::DuplicateHardwareId(HardwareModel::TBeam))
        );
    }

    #[test]
    fn test_global_registry_self_check() {
        assert_eq!(REGISTRY.validate_all(), Ok(()));
        assert_eq!(REGISTRY.variants().len(), boards::ALL.len());
    }

    #[test]
    fn test_build_without_board_feature() {
        if boards::BUILD_SELECTION.is_none() {
            assert_eq!(select_build_variant(), Err(RegistryError::NoBuildSelection));
            assert_eq!(REGISTRY.state(), RegistryState::Unselected);
        }
    }

    #[test]
    fn test_active_variant_serves_consumers() {
        let registry = VariantRegistry::new(&TWO_BOARDS);
        registry.select_variant(HardwareModel::TBeam).unwrap();

        let active = registry.active_variant().unwrap();
        assert_eq!(active.lookup(Signal::LoraCs).unwrap().number(), 18);
    }
}
