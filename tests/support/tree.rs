// Mirrors the crate's module layout so pure modules resolve their
// `crate::` and `super::` paths on the host.

mod constants {
    include!("../../src/constants.rs");
}
mod input {
    include!("../../src/input.rs");
}
mod camera {
    include!("../../src/camera.rs");
}
mod config {
    include!("../../src/config.rs");
}
mod core {
    pub mod actions {
        include!("../../src/core/actions.rs");
    }
    pub mod anim {
        include!("../../src/core/anim.rs");
    }
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod dialogue {
        include!("../../src/core/dialogue.rs");
    }
    pub mod geometry {
        include!("../../src/core/geometry.rs");
    }
    pub mod model {
        include!("../../src/core/model.rs");
    }
    pub mod narrative {
        include!("../../src/core/narrative.rs");
    }
    pub mod picking {
        include!("../../src/core/picking.rs");
    }
    pub mod quality {
        include!("../../src/core/quality.rs");
    }
    pub mod scene {
        include!("../../src/core/scene.rs");
    }
    pub mod state {
        include!("../../src/core/state.rs");
    }
}
