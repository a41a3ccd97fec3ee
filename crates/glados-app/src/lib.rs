pub mod application;
pub mod presentation;

#[cfg(test)]
mod test_support;
