mod flow;
mod properties;
