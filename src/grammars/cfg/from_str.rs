use nom::{is_space, IResult};
use std::fmt::Debug;
use std::str::FromStr;

use crate::grammars::cfg::{Cfg, CfgRule, Symbol};
use crate::util::parsing::{initial_rule_grammar_from_str, parse_token, parse_vec};

impl<N, T> FromStr for Cfg<N, T>
where
    N: FromStr,
    N::Err: Debug,
    T: FromStr,
    T::Err: Debug,
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (initial, rules) = initial_rule_grammar_from_str(s)?;

        Ok(Cfg { initial, rules })
    }
}

impl<N, T> FromStr for CfgRule<N, T>
where
    N: FromStr,
    N::Err: Debug,
    T: FromStr,
    T::Err: Debug,
{
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_cfg_rule(s.as_bytes()) {
            IResult::Done(_, result) => Ok(result),
            _ => Err(format!("Could not parse \'{}\'", s)),
        }
    }
}

fn parse_cfg_rule<N, T>(input: &[u8]) -> IResult<&[u8], CfgRule<N, T>>
where
    N: FromStr,
    N::Err: Debug,
    T: FromStr,
    T::Err: Debug,
{
    do_parse!(
        input,
        head: parse_token
            >> take_while!(is_space)
            >> alt!(tag!("→") | tag!("->") | tag!("=>"))
            >> take_while!(is_space)
            >> rhs: parse_rhs
            >> take_while!(is_space)
            >> alt!(eof!() | preceded!(tag!("%"), take_while!(|_| true)))
            >> (CfgRule { head, rhs })
    )
}

fn parse_symbol<N, T>(input: &[u8]) -> IResult<&[u8], Symbol<N, T>>
where
    N: FromStr,
    N::Err: Debug,
    T: FromStr,
    T::Err: Debug,
{
    do_parse!(
        input,
        result:
            alt!(
                do_parse!(
                    tag!("Nt")
                        >> take_while!(is_space)
                        >> token: parse_token
                        >> (Symbol::Variable(token))
                ) | do_parse!(
                    tag!("T")
                        >> take_while!(is_space)
                        >> token: parse_token
                        >> (Symbol::Terminal(token))
                )
            )
            >> (result)
    )
}

fn parse_rhs<N, T>(input: &[u8]) -> IResult<&[u8], Vec<Symbol<N, T>>>
where
    N: FromStr,
    N::Err: Debug,
    T: FromStr,
    T::Err: Debug,
{
    parse_vec(input, parse_symbol, "[", "]", ",")
}
