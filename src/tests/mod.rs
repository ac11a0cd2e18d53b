//! sbf-skyview lib test modules

mod parsing;
