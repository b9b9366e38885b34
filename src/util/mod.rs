pub mod parse;

#[cfg(test)]
mod test;
