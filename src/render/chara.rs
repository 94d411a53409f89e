//! Embedded cow character templates.
//!
//! Templates use the cowfile placeholders `$thoughts`, `$eyes`, and
//! `$tongue`. Not every character has a face: figures like tux or the dragon
//! draw their own and ignore eye/tongue overrides.

/// Character names guaranteed to exist regardless of catalog state. The
/// dispatcher falls back to this list when the catalog cannot be enumerated.
pub const FALLBACK_CHARACTERS: [&str; 9] = [
    "default",
    "small",
    "tux",
    "moose",
    "sheep",
    "dragon",
    "elephant",
    "skeleton",
    "stimpy",
];

const DEFAULT_COW: &str = r#"
        $thoughts   ^__^
         $thoughts  ($eyes)\_______
            (__)\       )\/\
                $tongue ||----w |
                   ||     ||
"#;

const SMALL_COW: &str = r#"
       $thoughts   ,__,
        $thoughts  ($eyes)____
           (__)    )\
            $tongue ||--|| *
"#;

const TUX: &str = r#"
   $thoughts
    $thoughts
        .--.
       |o_o |
       |:_/ |
      //   \ \
     (|     | )
    /'\_   _/`\
    \___)=(___/
"#;

const MOOSE: &str = r#"
  $thoughts
   $thoughts   \_\_    _/_/
    $thoughts      \__/
           ($eyes)\_______
           (__)\       )\/\
            $tongue ||----w |
               ||     ||
"#;

const SHEEP: &str = r#"
  $thoughts
   $thoughts
       __
      U$eyesU\.'@@@@@@`.
      \__/(@@@@@@@@@@)
           (@@@@@@@@)
           `YY~~~~YY'
            ||    ||
"#;

const DRAGON: &str = r#"
      $thoughts                    / \  //\
       $thoughts    |\___/|      /   \//  \\
            /0  0  \__  /    //  | \ \
           /     /  \/_/    //   |  \  \
           @_^_@'/   \/_   //    |   \   \
           //_^_/     \/_ //     |    \    \
        ( //) |        \///      |     \     \
      ( / /) _|_ /   )  //       |      \     _\
    ( // /) '/,_ _ _/  ( ; -.    |    _ _\.-~        .-~~~^-.
  (( / / )) ,-{        _      `-.|.-~-.           .~         `.
 (( // / ))  '/\      /                 ~-. _ .-~      .-~^-.  \
 (( /// ))      `.   {            }                   /      \  \
  (( / ))     .----~-.\        \-'                 .~         \  `. \^-.
             ///.----..>        \             _ -~             `.  ^-`  ^-_
               ///-._ _ _ _ _ _ _}^ - - - - ~                     ~-- ,.-~
                                                                  /.-~
"#;

const ELEPHANT: &str = r#"
 $thoughts     /\  ___  /\
  $thoughts   // \/   \/ \\
     ((    $eyes    ))
      \\ /     \ //
       \/  | |  \/
        |  | |  |
        |  | |  |
        |   o   |
        | |   | |
        |m|   |m|
"#;

const SKELETON: &str = r#"
          $thoughts      (__)
           $thoughts     /$eyes|
            $thoughts   (_"_)*+++++++++*
                    //I#\\\\\\\\I\
                    I[I|I|||||I I `
                    I`I'///'' I I
                    I I       I I
                    ~ ~       ~ ~
                      Scowleton
"#;

const STIMPY: &str = r#"
  $thoughts     .    _  .
   $thoughts    |\_|/__/|
       / / \/ \  \
      /__|O||O|__ \
     |/_ \_/\_/ _\ |
     | | (____) | ||
     \/\___/\__/  //
     (_/         ||
      |          ||
      |          ||\
       \        //_/
        \______//
       __ || __||
      (____(____)
"#;

const TEMPLATES: &[(&str, &str)] = &[
    ("default", DEFAULT_COW),
    ("dragon", DRAGON),
    ("elephant", ELEPHANT),
    ("moose", MOOSE),
    ("sheep", SHEEP),
    ("skeleton", SKELETON),
    ("small", SMALL_COW),
    ("stimpy", STIMPY),
    ("tux", TUX),
];

/// Look up the template body for a character name.
pub fn template(name: &str) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, body)| body.strip_prefix('\n').unwrap_or(body))
}

/// Sorted names of all embedded characters.
pub fn names() -> Vec<String> {
    TEMPLATES.iter().map(|(name, _)| name.to_string()).collect()
}
