use rand::{seq::SliceRandom, thread_rng};

/// Generate a short random run name like `run-kx37`, used when the
/// operator does not name the run explicitly.
pub fn generate_run_name() -> String {
    let mut rng = thread_rng();
    let letters: Vec<char> = ('a'..='z').collect();
    let digits: Vec<char> = ('0'..='9').collect();

    let mut name = String::from("run-");
    for _ in 0..2 {
        name.push(*letters.choose(&mut rng).unwrap());
    }
    for _ in 0..2 {
        name.push(*digits.choose(&mut rng).unwrap());
    }
    name
}
