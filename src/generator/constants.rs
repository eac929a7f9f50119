/// Budget shared by whole search trials and by operator draws for one pair
pub const REPETITIONS: usize = 1000;
