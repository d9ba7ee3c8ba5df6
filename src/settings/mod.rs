pub mod constants;
pub mod errors;
pub mod impls;
pub mod types;

#[cfg(test)]
mod tests;
