//! Integer addition and multiplication built only from bit operations.
//!
//! Both functions agree with two's-complement wrapping arithmetic on `i32`.

/// Ripple-carry addition: XOR is the sum without carries, AND shifted left
/// is the carry. Repeat until no carry is left.
pub fn add(lhs: i32, rhs: i32) -> i32 {
    add_steps(lhs, rhs, |_, _| {})
}

/// Shift-and-add multiplication: for every set bit k of `rhs`, add
/// `lhs << k`.
pub fn multiply(lhs: i32, rhs: i32) -> i32 {
    multiply_steps(lhs, rhs, |_, _, _| {})
}

/// Runs the carry loop, calling `on_step(sum, carry)` after each round.
fn add_steps(lhs: i32, rhs: i32, mut on_step: impl FnMut(i32, i32)) -> i32 {
    let mut sum = lhs;
    let mut carry = rhs;
    while carry != 0 {
        let next_carry = (sum & carry) << 1;
        sum ^= carry;
        carry = next_carry;
        on_step(sum, carry);
    }
    sum
}

/// Runs the shift-and-add loop, calling `on_partial(k, addend, result)` for
/// every set bit k of `rhs`.
fn multiply_steps(lhs: i32, rhs: i32, mut on_partial: impl FnMut(u32, i32, i32)) -> i32 {
    let mut result = 0;
    let mut addend = lhs;
    // Walk the bits of rhs as unsigned so negative multipliers terminate.
    let mut bits = rhs as u32;
    let mut k = 0;
    while bits != 0 {
        if bits & 1 == 1 {
            result = add(result, addend);
            on_partial(k, addend, result);
        }
        addend <<= 1;
        bits >>= 1;
        k += 1;
    }
    result
}

/// Step-by-step trace of [`add`].
pub fn add_report(lhs: i32, rhs: i32) -> String {
    let mut s = String::new();
    s.push_str("Bitwise addition (i32)\n");
    s.push_str("======================\n\n");
    s.push_str(&format_line("lhs", lhs));
    s.push_str(&format_line("rhs", rhs));
    s.push('\n');

    let mut step = 1;
    let sum = add_steps(lhs, rhs, |sum, carry| {
        s.push_str(&format!("step {step:2}: sum   = {}\n", bin32(sum)));
        s.push_str(&format!("         carry = {}\n", bin32(carry)));
        step += 1;
    });

    s.push('\n');
    s.push_str(&result_block(sum));
    s
}

/// Partial-product trace of [`multiply`].
pub fn multiply_report(lhs: i32, rhs: i32) -> String {
    let mut s = String::new();
    s.push_str("Bitwise multiplication (i32)\n");
    s.push_str("============================\n\n");
    s.push_str(&format_line("lhs", lhs));
    s.push_str(&format_line("rhs", rhs));
    s.push('\n');

    let result = multiply_steps(lhs, rhs, |k, addend, result| {
        s.push_str(&format!("bit {k:2}: + {}\n", bin32(addend)));
        s.push_str(&format!("        = {}\n", bin32(result)));
    });

    s.push('\n');
    s.push_str(&result_block(result));
    s
}

fn result_block(v: i32) -> String {
    let mut s = String::new();
    s.push_str("Result\n");
    s.push_str("------\n");
    s.push_str(&format!("dec: {v}\n"));
    s.push_str(&format!("hex: {}\n", hex(v)));
    s
}

fn format_line(name: &str, v: i32) -> String {
    format!("{name} = {v}  ({})\n", hex(v))
}

fn hex(v: i32) -> String {
    format!("0x{:08X}", v as u32)
}

fn bin32(v: i32) -> String {
    let v = v as u32;
    let mut out = String::with_capacity(32 + 7);
    for i in (0..32).rev() {
        out.push(if (v >> i) & 1 == 1 { '1' } else { '0' });
        if i % 4 == 0 && i != 0 {
            out.push('_');
        }
    }
    out
}
