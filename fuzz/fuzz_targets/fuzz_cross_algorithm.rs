#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_core::complexity::{strassen_additions, strassen_multiplications};
use strassen_core::{multiply_naive, multiply_strassen, Matrix};

fuzz_target!(|data: &[u8]| {
    let Some((&power, rest)) = data.split_first() else {
        return;
    };
    // Orders 1..=16 keep each run fast
    let n = 1usize << (power % 5);
    if rest.len() < 2 * n * n {
        return;
    }

    let values: Vec<i64> = rest.iter().map(|&b| i64::from(b as i8)).collect();
    let a = Matrix::from_vec(n, n, values[..n * n].to_vec()).unwrap();
    let b = Matrix::from_vec(n, n, values[n * n..2 * n * n].to_vec()).unwrap();

    let naive = multiply_naive(&a, &b).unwrap();
    let strassen = multiply_strassen(&a, &b).unwrap();
    assert_eq!(naive.result, strassen.result, "Naive != Strassen at n={n}");
    assert_eq!(strassen.multiplications(), strassen_multiplications(n));
    assert_eq!(strassen.additions(), strassen_additions(n));
});
