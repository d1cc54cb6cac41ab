
// Token values are checked against the historical token lists; the VICE
// monitor was used to spot check the C64 and C128 cases.

#[cfg(test)]
use std::fmt::Write;
#[cfg(test)]
use regex::Regex;
#[cfg(test)]
use super::tokenizer::Tokenizer;
#[cfg(test)]
use crate::lang::Dialect;

#[cfg(test)]
fn test_tokenizer(dialect: Dialect,test_code: &str,expected: &str) {
    let mut tokenizer = Tokenizer::new(dialect);
    // get actual into hex string
    let bytes = tokenizer.tokenize_line(test_code);
    assert_eq!(tokenizer.err_count(),0);
    let mut listfmt = String::new();
    write!(&mut listfmt,"{:02X?}",bytes).expect("formatting error");
    let re = Regex::new(r"[\[\] ,]").unwrap();
    let actual = re.replace_all(&listfmt,"".to_string());
    assert_eq!(actual,expected);
}

#[cfg(test)]
fn test_tokenizer_err(dialect: Dialect,test_code: &str,expected: &str,errors: usize) {
    let mut tokenizer = Tokenizer::new(dialect);
    let bytes = tokenizer.tokenize_line(test_code);
    assert_eq!(tokenizer.err_count(),errors);
    let mut listfmt = String::new();
    write!(&mut listfmt,"{:02X?}",bytes).expect("formatting error");
    let re = Regex::new(r"[\[\] ,]").unwrap();
    let actual = re.replace_all(&listfmt,"".to_string());
    assert_eq!(actual,expected);
}

mod base_keywords {
    use crate::lang::Dialect;
    #[test]
    fn print_string() {
        let test_code = "10 print\"hello\"";
        let expected = "0A00992248454C4C4F2200";
        super::test_tokenizer(Dialect::Basic2,test_code,expected);
    }
    #[test]
    fn shifted_string() {
        let test_code = "10 PRINT\"HELLO\"";
        let expected = "0A009922C8C5CCCCCF2200";
        super::test_tokenizer(Dialect::Basic2,test_code,expected);
    }
    #[test]
    fn input_hash_before_input() {
        let test_code = "10 input#1,a$";
        let expected = "0A0084312C412400";
        super::test_tokenizer(Dialect::Basic2,test_code,expected);
    }
    #[test]
    fn go_spaced_to() {
        let test_code = "10 go to 10";
        let expected = "0A00CB20A420313000";
        super::test_tokenizer(Dialect::Basic2,test_code,expected);
    }
    #[test]
    fn equals_is_a_token() {
        let test_code = "10 x=pot(1)";
        let expected = "0A0058B2CE0228312900";
        super::test_tokenizer(Dialect::Basic71,test_code,expected);
    }
}

mod latching_keywords {
    use crate::lang::Dialect;
    #[test]
    fn rem_stops_tokenizing() {
        let test_code = "10 rem hello";
        let expected = "0A008F2048454C4C4F00";
        super::test_tokenizer(Dialect::Basic2,test_code,expected);
    }
    #[test]
    fn data_stops_tokenizing() {
        let test_code = "10 data print";
        let expected = "0A0083205052494E5400";
        super::test_tokenizer(Dialect::Basic2,test_code,expected);
    }
}

mod escapes {
    use crate::lang::Dialect;
    #[test]
    fn space_run() {
        let test_code = "10 print\"{space*3}\"";
        let expected = "0A0099222020202200";
        super::test_tokenizer(Dialect::Basic2,test_code,expected);
    }
    #[test]
    fn letter_run() {
        let test_code = "10 print\"{a*3}\"";
        let expected = "0A0099224141412200";
        super::test_tokenizer(Dialect::Basic2,test_code,expected);
    }
    #[test]
    fn numeric_code() {
        let test_code = "5 print\"{147}\"";
        let expected = "05009922932200";
        super::test_tokenizer(Dialect::Basic2,test_code,expected);
    }
    #[test]
    fn named_code() {
        let test_code = "5 print\"{clear}\"";
        let expected = "05009922932200";
        super::test_tokenizer(Dialect::Basic2,test_code,expected);
    }
    #[test]
    fn letter_case_decides() {
        // E is the shifted letter, e the unshifted
        let test_code = "10 print\"{E}{e}\"";
        let expected = "0A009922C5452200";
        super::test_tokenizer(Dialect::Basic2,test_code,expected);
    }
}

mod dialect_keywords {
    use crate::lang::Dialect;
    #[test]
    fn fe_prefixed() {
        let test_code = "10 bank 0";
        let expected = "0A00FE02203000";
        super::test_tokenizer(Dialect::Basic71,test_code,expected);
    }
    #[test]
    fn graphics52_plot() {
        let test_code = "10 plot 5,5";
        let expected = "0A00CE20352C3500";
        super::test_tokenizer(Dialect::Graphics52,test_code,expected);
    }
    #[test]
    fn plot_is_text_elsewhere() {
        let test_code = "10 plot 5,5";
        let expected = "0A00504C4F5420352C3500";
        super::test_tokenizer(Dialect::Basic2,test_code,expected);
    }
    #[test]
    fn tfc3_renum() {
        let test_code = "10 renum";
        let expected = "0A00CF00";
        super::test_tokenizer(Dialect::TFC3,test_code,expected);
    }
    #[test]
    fn basic4_catalog() {
        let test_code = "10 catalog";
        let expected = "0A00D700";
        super::test_tokenizer(Dialect::Basic4,test_code,expected);
    }
    #[test]
    fn super_expander_graphic() {
        let test_code = "10 graphic 2";
        let expected = "0A00CD203200";
        super::test_tokenizer(Dialect::VicSuper,test_code,expected);
    }
}

mod line_numbers {
    use crate::lang::Dialect;
    #[test]
    fn oversized_wraps() {
        // 70000 mod 65536 = 4464, a warning but not an error
        let test_code = "70000 rem";
        let expected = "70118F00";
        super::test_tokenizer(Dialect::Basic2,test_code,expected);
    }
    #[test]
    fn leading_whitespace() {
        let test_code = "   10 end";
        let expected = "0A008000";
        super::test_tokenizer(Dialect::Basic2,test_code,expected);
    }
}

mod hard_errors {
    use crate::lang::Dialect;
    #[test]
    fn unterminated_escape() {
        let test_code = "10 {foo";
        let expected = "0A0000";
        super::test_tokenizer_err(Dialect::Basic2,test_code,expected,1);
    }
    #[test]
    fn unknown_escape_name() {
        let test_code = "10 print\"{zzz}\"";
        let expected = "0A0099222200";
        super::test_tokenizer_err(Dialect::Basic2,test_code,expected,1);
    }
    #[test]
    fn numeric_escape_overflow() {
        let test_code = "10 print\"{999}\"";
        let expected = "0A0099222200";
        super::test_tokenizer_err(Dialect::Basic2,test_code,expected,1);
    }
    #[test]
    fn zero_repeat_count() {
        let test_code = "10 print\"{a*0}\"";
        let expected = "0A0099222200";
        super::test_tokenizer_err(Dialect::Basic2,test_code,expected,1);
    }
    #[test]
    fn illegal_host_character() {
        let test_code = "10 print~";
        let expected = "0A009900";
        super::test_tokenizer_err(Dialect::Basic2,test_code,expected,1);
    }
}
