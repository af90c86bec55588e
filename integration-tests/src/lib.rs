//! Shared fixtures for the integration test suites.

use solgain_core::{Compass, DesignSpec, Extent, FacadeDims, Ratio, SkylightDims};

/// Builds facade dimensions from raw extents.
pub fn facade(width: f64, height: f64) -> FacadeDims {
    FacadeDims {
        width: Extent::new(width).unwrap(),
        height: Extent::new(height).unwrap(),
    }
}

/// A 2 m × 1.5 m glazed box on every side: the worked reference design
/// (wwr 0.4 everywhere, shgc 0.5, no skylight).
pub fn glass_box(name: &str) -> DesignSpec {
    DesignSpec {
        name: name.to_owned(),
        dimensions: Compass::uniform(facade(2.0, 1.5)),
        wwr: Compass::uniform(Ratio::new(0.4).unwrap()),
        shgc: Ratio::new(0.5).unwrap(),
        skylight: None,
    }
}

/// The reference design with a 1 m × 2 m roof skylight added.
pub fn glass_box_with_skylight(name: &str) -> DesignSpec {
    DesignSpec {
        skylight: Some(SkylightDims {
            width: Extent::new(1.0).unwrap(),
            height: Extent::new(2.0).unwrap(),
        }),
        ..glass_box(name)
    }
}

/// The reference design with every facade's window-to-wall ratio replaced.
pub fn glass_box_with_wwr(name: &str, wwr: f64) -> DesignSpec {
    DesignSpec {
        wwr: Compass::uniform(Ratio::new(wwr).unwrap()),
        ..glass_box(name)
    }
}
