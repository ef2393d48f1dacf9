//! Compares translated values with the same expressions written in Rust

use num_bigint::BigUint;
use num_traits::pow;
use powexpr::translate;
use test_log::test;

fn int(value: u32) -> BigUint {
    BigUint::from(value)
}

fn check(src: &str, expected: BigUint) -> eyre::Result<()> {
    let actual = translate(src).into_result()?;
    assert_eq!(actual, expected, "{src}");
    Ok(())
}

#[test]
fn test_cross_check() -> eyre::Result<()> {
    check("7", int(7))?;
    check("4+5*6", int(4) + int(5) * int(6))?;
    check("pow(10,2)", pow(int(10), 2))?;
    check("pow(2,pow(3,4))", pow(int(2), pow(3usize, 4)))?;
    check("pow(1+3,2*5)+9", pow(int(1) + int(3), 2 * 5) + int(9))?;
    check("2*3+4*5", int(2) * int(3) + int(4) * int(5))?;
    check("pow(2,3)*4", pow(int(2), 3) * int(4))?;
    check("1+2+3*4*5+6", int(1) + int(2) + int(3) * int(4) * int(5) + int(6))?;
    check("pow(pow(2,3),pow(2,3))", pow(pow(int(2), 3), pow(2usize, 3)))?;
    check("pow(7, 1000) * 0 + pow(3, 999)", pow(int(3), 999))?;
    Ok(())
}
