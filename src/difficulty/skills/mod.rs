pub use self::{
    anchor::Anchor,
    cross::cross_strain,
    jack::JackStrain,
    press::press_strain,
    release::release_strain,
};

pub mod anchor;
pub mod cross;
pub mod jack;
pub mod press;
pub mod release;
