use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{Ident, LitStr, parse_macro_input};

/// Resolves a pitch class name to a `PitchClass` variant at compile time.
///
/// Misspelled names become compile errors instead of runtime
/// `InvalidPitchClass` failures.
///
/// # Format
///
/// One of C, D, E, F, G, A, B with an optional `#` or `b`, case-insensitive.
/// Flats resolve to their sharp equivalents.
///
/// # Examples
///
/// ```ignore
/// use sonarclave::pitch;
///
/// let root = pitch!("C#");
/// let same = pitch!("Db");
/// assert_eq!(root, same);
/// ```
#[proc_macro]
pub fn pitch(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as LitStr);
    let name = input.value();

    match variant_for(&name) {
        Ok(variant) => {
            let variant = Ident::new(variant, Span::call_site());
            let expanded = quote! {
                ::sonarclave::PitchClass::#variant
            };
            TokenStream::from(expanded)
        }
        Err(e) => {
            let error_msg = format!("Invalid pitch class '{}': {}", name, e);
            let expanded = quote! {
                compile_error!(#error_msg)
            };
            TokenStream::from(expanded)
        }
    }
}

fn variant_for(s: &str) -> Result<&'static str, String> {
    let s = s.trim().to_uppercase();
    match s.as_str() {
        "C" | "B#" => Ok("C"),
        "C#" | "DB" => Ok("CSharp"),
        "D" => Ok("D"),
        "D#" | "EB" => Ok("DSharp"),
        "E" | "FB" => Ok("E"),
        "F" | "E#" => Ok("F"),
        "F#" | "GB" => Ok("FSharp"),
        "G" => Ok("G"),
        "G#" | "AB" => Ok("GSharp"),
        "A" => Ok("A"),
        "A#" | "BB" => Ok("ASharp"),
        "B" | "CB" => Ok("B"),
        "" => Err("empty string".to_string()),
        _ => Err(format!("unknown name '{}'", s)),
    }
}
