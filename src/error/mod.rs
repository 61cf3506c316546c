/*!
 This module defines the errors that can happen when decoding archive data.
*/

pub mod archive;
pub mod color;
pub mod font;
