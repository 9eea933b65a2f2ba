/// A logical chip select line on an IOM module.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChipSelect {
    /// Chip select 0, present on every module.
    #[default]
    Cs0,
    /// Chip select 1.
    Cs1,
    /// Chip select 2.
    Cs2,
    /// Chip select 3.
    Cs3,
}

/// The hardware resources backing one chip select line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CsResource {
    /// The physical chip select channel on the module.
    pub channel: u32,
    /// The pad driving the chip select line.
    pub pin: u8,
}

/// The chip select resources of a single IOM module.
///
/// Every module routes CS0; which of CS1 through CS3 exist depends on
/// the board variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CsModule {
    pub cs0: CsResource,
    pub cs1: Option<CsResource>,
    pub cs2: Option<CsResource>,
    pub cs3: Option<CsResource>,
}

impl CsModule {
    /// A module routing only its CS0 line.
    pub const fn cs0_only(cs0: CsResource) -> Self {
        Self {
            cs0,
            cs1: None,
            cs2: None,
            cs3: None,
        }
    }

    /// The resources for a chip select, if the board routes it.
    #[inline(always)]
    pub const fn get(&self, chip_select: ChipSelect) -> Option<CsResource> {
        match chip_select {
            ChipSelect::Cs0 => Some(self.cs0),
            ChipSelect::Cs1 => self.cs1,
            ChipSelect::Cs2 => self.cs2,
            ChipSelect::Cs3 => self.cs3,
        }
    }
}

/// A board's chip select map, one entry per IOM module.
///
/// [CsMap::resource] never fails: chip selects the board does not route
/// resolve to the module's CS0 resources, and module indices past the
/// last module resolve through module 0. Callers that need to tell a
/// missing resource apart from CS0 use [CsMap::lookup].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CsMap {
    modules: [CsModule; 4],
}

impl CsMap {
    /// Build a map from per-module resources.
    pub const fn new(modules: [CsModule; 4]) -> Self {
        Self { modules }
    }

    #[inline(always)]
    fn module(&self, module: u8) -> &CsModule {
        self.modules.get(module as usize).unwrap_or(&self.modules[0])
    }

    /// The resources for (module, chip select), without any fallback.
    #[inline(always)]
    pub fn lookup(&self, module: u8, chip_select: ChipSelect) -> Option<CsResource> {
        self.module(module).get(chip_select)
    }

    /// Resolve (module, chip select) to its resources, falling back to
    /// the module's CS0 when the pair is not routed.
    #[inline(always)]
    pub fn resource(&self, module: u8, chip_select: ChipSelect) -> CsResource {
        let entry = self.module(module);
        entry.get(chip_select).unwrap_or(entry.cs0)
    }

    /// Resolve to the physical chip select channel.
    #[inline(always)]
    pub fn channel(&self, module: u8, chip_select: ChipSelect) -> u32 {
        self.resource(module, chip_select).channel
    }

    /// Resolve to the chip select pad.
    #[inline(always)]
    pub fn pin(&self, module: u8, chip_select: ChipSelect) -> u8 {
        self.resource(module, chip_select).pin
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn map() -> CsMap {
        CsMap::new([
            CsModule {
                cs0: CsResource {
                    channel: 1,
                    pin: 11,
                },
                cs1: None,
                cs2: Some(CsResource {
                    channel: 3,
                    pin: 23,
                }),
                cs3: None,
            },
            CsModule::cs0_only(CsResource {
                channel: 2,
                pin: 14,
            }),
            CsModule::cs0_only(CsResource {
                channel: 0,
                pin: 27,
            }),
            CsModule::cs0_only(CsResource {
                channel: 1,
                pin: 38,
            }),
        ])
    }

    const ALL_CS: [ChipSelect; 4] = [
        ChipSelect::Cs0,
        ChipSelect::Cs1,
        ChipSelect::Cs2,
        ChipSelect::Cs3,
    ];

    #[test]
    fn cs0_defined_everywhere() {
        let map = map();
        for module in 0..4 {
            assert!(map.lookup(module, ChipSelect::Cs0).is_some());
        }
    }

    #[test]
    fn routed_pair_resolves_to_itself() {
        let map = map();
        assert_eq!(3, map.channel(0, ChipSelect::Cs2));
        assert_eq!(23, map.pin(0, ChipSelect::Cs2));
    }

    #[test]
    fn missing_pair_falls_back_to_cs0() {
        let map = map();
        for module in 0..4 {
            for cs in ALL_CS {
                if map.lookup(module, cs).is_none() {
                    assert_eq!(map.channel(module, ChipSelect::Cs0), map.channel(module, cs));
                    assert_eq!(map.pin(module, ChipSelect::Cs0), map.pin(module, cs));
                }
            }
        }
    }

    #[test]
    fn out_of_range_module_clamps_to_zero() {
        let map = map();
        for module in [4, 5, 255] {
            for cs in ALL_CS {
                assert_eq!(map.resource(0, cs), map.resource(module, cs));
            }
        }
    }

    #[test]
    fn default_is_cs0() {
        assert_eq!(ChipSelect::Cs0, ChipSelect::default());
    }
}
