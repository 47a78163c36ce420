#[cfg(test)]
mod admin;
#[cfg(test)]
mod backend;
