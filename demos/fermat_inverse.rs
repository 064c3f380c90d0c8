use fastpow::{power, power_mod, Modulus, PowError};

/// Inverts `a` modulo the prime `p` via Fermat's little theorem.
fn fermat_inverse(p: &Modulus, a: i64) -> Result<i64, PowError> {
    p.pow(a, p.get() - 2)
}

/// Reconstructs `x mod p1*p2*p3` from its three residues (Garner's form).
fn crt3(residues: [i64; 3], primes: [Modulus; 3]) -> Result<(i128, i128), PowError> {
    let [r1, r2, r3] = residues;
    let [q1, q2, q3] = primes;
    let (m1, m2, m3) = (q1.get() as i128, q2.get() as i128, q3.get() as i128);

    let mut x = r1 as i128;
    let t2 = q2.mul(r2 - q2.reduce(r1), fermat_inverse(&q2, q1.get())?);
    x += t2 as i128 * m1;

    let m12 = q3.mul(q1.get(), q2.get());
    let x_mod_q3 = (x % m3) as i64;
    let t3 = q3.mul(r3 - x_mod_q3, fermat_inverse(&q3, m12)?);
    x += t3 as i128 * m1 * m2;

    let total = m1 * m2 * m3;
    Ok((x.rem_euclid(total), total))
}

fn main() -> Result<(), PowError> {
    let primes = [
        Modulus::new(1_000_000_007)?,
        Modulus::new(1_000_000_009)?,
        Modulus::new(1_000_000_021)?,
    ];

    for p in &primes {
        for a in [2, 3, 10, 123_456_789] {
            let inv = fermat_inverse(p, a)?;
            println!("{a}^-1 mod {} = {inv} (check {})", p.get(), p.mul(a, inv));
        }
    }

    // 3^55 does not fit in an i64 but does fit below p1*p2*p3.
    let exponent = 55;
    let residues = [
        power_mod(3, exponent, primes[0].get())?,
        power_mod(3, exponent, primes[1].get())?,
        power_mod(3, exponent, primes[2].get())?,
    ];
    let (value, total) = crt3(residues, primes)?;
    let expected = 3i128.pow(exponent as u32);
    println!("3^{exponent} via CRT = {value} (mod {total})");
    println!("3^{exponent} exact    = {expected}");
    println!("3^{exponent} wrapped  = {}", power(3, exponent));

    if value != expected {
        eprintln!("crt reconstruction mismatch");
        std::process::exit(1);
    }
    Ok(())
}
