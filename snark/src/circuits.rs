//! Small hand-flattened circuits, each returning a constraint system together with a
//! satisfying witness.

use crate::errors::Result;
use crate::r1cs::R1CS;
use qap_algebra::prelude::*;

fn one_hot<F: Scalar>(len: usize, index: usize) -> Vec<F> {
    let mut row = vec![F::zero(); len];
    row[index] = F::one();
    row
}

/// `x * x = out` over the variables `[1, x, out]`.
pub fn square_circuit<F: Scalar>(x: F) -> Result<(R1CS<F>, Vec<F>)> {
    let mut cs = R1CS::new(3, 1);
    let out = x.mul(&x);
    cs.set_constraint(0, &one_hot(3, 1), &one_hot(3, 1), &one_hot(3, 2))?;
    Ok((cs, vec![F::one(), x, out]))
}

/// `x^3 + x + 5 = out` over the variables `[1, x, out, v1, v2]`, flattened as
///
/// ```text
/// x * x            = v1
/// v1 * x           = v2
/// (v2 + x + 5) * 1 = out
/// ```
pub fn cubic_circuit<F: Scalar>(x: F) -> Result<(R1CS<F>, Vec<F>)> {
    const NUM_VARS: usize = 5;
    let v1 = x.mul(&x);
    let v2 = v1.mul(&x);
    let out = v2.add(&x).add(&F::from(5u32));

    let mut a2 = vec![F::zero(); NUM_VARS];
    a2[0] = F::from(5u32);
    a2[1] = F::one();
    a2[4] = F::one();

    let rows = [
        (one_hot(NUM_VARS, 1), one_hot(NUM_VARS, 1), one_hot(NUM_VARS, 3)),
        (one_hot(NUM_VARS, 3), one_hot(NUM_VARS, 1), one_hot(NUM_VARS, 4)),
        (a2, one_hot(NUM_VARS, 0), one_hot(NUM_VARS, 2)),
    ];
    let mut cs = R1CS::new(NUM_VARS, rows.len());
    for (i, (a, b, c)) in rows.iter().enumerate() {
        cs.set_constraint(i, a, b, c)?;
    }
    Ok((cs, vec![F::one(), x, out, v1, v2]))
}
