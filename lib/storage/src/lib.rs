mod memory;

pub use memory::MemProgramStore;
