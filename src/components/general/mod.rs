pub mod game_card;
pub mod media_player;
pub mod ranked_list;
pub mod results_table;
pub mod thumbnail;
pub mod toast;

#[allow(unused_imports)]
pub use game_card::*;
#[allow(unused_imports)]
pub use media_player::*;
#[allow(unused_imports)]
pub use ranked_list::*;
#[allow(unused_imports)]
pub use results_table::*;
#[allow(unused_imports)]
pub use thumbnail::*;
#[allow(unused_imports)]
pub use toast::*;
