/*!
 Contains the attribute record codecs: the typed values archives carry and the
 logic to decode and encode them.
*/

pub mod color;
pub mod font;
