mod invocation;
mod snapshot;
