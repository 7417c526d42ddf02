pub mod errors;
pub mod homework;
pub mod telegram;

#[cfg(test)]
mod test_support;
