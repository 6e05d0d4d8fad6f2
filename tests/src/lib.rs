#[cfg(test)]
#[macro_use]
extern crate lazy_static;

#[cfg(test)]
mod data;
#[cfg(test)]
mod pipeline;
