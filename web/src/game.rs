use crate::client::{DEFAULT_API_URL, HttpTriviaApi};
use clap::Args;
use trivia_core as trivia;
use yew::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Failed(trivia::Error),
}

/// Everything one page session knows about the game.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct GameSession {
    board: Option<trivia::Board>,
    status: LoadStatus,
    started: bool,
}

impl GameSession {
    pub(crate) fn board(&self) -> Option<&trivia::Board> {
        self.board.as_ref()
    }

    pub(crate) fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub(crate) fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }

    /// Enters the loading state, unless a load is already in flight.
    pub(crate) fn begin_load(&mut self) -> bool {
        if self.is_loading() {
            log::debug!("load already in progress, ignoring start");
            return false;
        }
        self.status = LoadStatus::Loading;
        self.started = true;
        true
    }

    /// A failed load keeps whatever board was shown before.
    pub(crate) fn finish_load(&mut self, result: trivia::Result<trivia::Board>) {
        match result {
            Ok(board) => {
                log::info!("board loaded: {:?}", board.titles().collect::<Vec<_>>());
                self.board = Some(board);
                self.status = LoadStatus::Idle;
            }
            Err(err) => {
                log::error!("could not load board: {}", err);
                self.status = LoadStatus::Failed(err);
            }
        }
    }

    pub(crate) fn reveal(&mut self, pos: trivia::CluePos) -> bool {
        if self.is_loading() {
            return false;
        }
        self.board
            .as_mut()
            .map_or(false, |board| board.reveal(pos).has_update())
    }

    pub(crate) fn trigger_label(&self) -> &'static str {
        match (self.is_loading(), self.started) {
            (true, _) => "Loading...",
            (false, true) => "Restart!",
            (false, false) => "Start!",
        }
    }
}

pub trait HasUpdate {
    fn has_update(self) -> bool;
}

impl<E: std::fmt::Display> HasUpdate for Result<trivia::RevealOutcome, E> {
    fn has_update(self) -> bool {
        match self {
            Ok(outcome) => outcome.has_update(),
            Err(err) => {
                log::warn!("ignoring click: {}", err);
                false
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    StartGame,
    BoardLoaded(trivia::Result<trivia::Board>),
    Reveal(trivia::CluePos),
}

fn cell_text(clue: &trivia::Clue) -> &str {
    clue.visible_text().unwrap_or("?")
}

fn cell_class(state: trivia::RevealState) -> Classes {
    use trivia::RevealState::*;
    classes!(
        "clue",
        match state {
            Hidden => classes!(),
            Question => classes!("question"),
            Answer => classes!("answer"),
        }
    )
}

#[derive(Properties, Clone, PartialEq)]
struct ClueProps {
    pos: trivia::CluePos,
    clue: trivia::Clue,
    onreveal: Callback<trivia::CluePos>,
}

#[function_component(ClueCell)]
fn clue_component(props: &ClueProps) -> Html {
    let ClueProps {
        pos,
        clue,
        onreveal,
    } = props.clone();
    let class = cell_class(clue.reveal_state());
    let text = cell_text(&clue).to_string();

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("{:?} clicked", pos);
        onreveal.emit(pos);
    });

    html! {
        <td {class} {onclick}>{text}</td>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct TriviaBoardProps {
    session: GameSession,
    onstart: Callback<MouseEvent>,
    onreveal: Callback<trivia::CluePos>,
}

#[function_component(TriviaBoard)]
fn trivia_board(props: &TriviaBoardProps) -> Html {
    let TriviaBoardProps {
        session,
        onstart,
        onreveal,
    } = props;
    let loading = session.is_loading();

    let status = match session.status() {
        LoadStatus::Loading => html! {
            <div id="spin-container"><i class="spinner"/></div>
        },
        LoadStatus::Failed(err) => html! {
            <p class="error">{format!("Could not load the board: {}", err)}</p>
        },
        LoadStatus::Idle => html! {},
    };

    // the grid stays hidden until the new board arrives
    let table = match session.board() {
        Some(board) if !loading => html! {
            <table id="jeopardy" class={board.is_finished().then_some("finished")}>
                <thead>
                    <tr>
                        { for board.titles().map(|title| html! { <td>{title.to_string()}</td> }) }
                    </tr>
                </thead>
                <tbody>
                    {
                        for board.rows().map(|row| html! {
                            <tr>
                                {
                                    for row.map(|(pos, clue)| html! {
                                        <ClueCell {pos} clue={clue.clone()} onreveal={onreveal.clone()}/>
                                    })
                                }
                            </tr>
                        })
                    }
                </tbody>
            </table>
        },
        _ => html! {},
    };

    html! {
        <div class="trivia">
            <button id="start" class={loading.then_some("disabled")} disabled={loading} onclick={onstart.clone()}>
                {session.trigger_label()}
            </button>
            {status}
            {table}
        </div>
    }
}

fn positive_count() -> clap::builder::RangedU64ValueParser<usize> {
    clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
}

#[derive(Args, Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    /// Base URL of the trivia service
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Number of categories on the board
    #[arg(long, default_value_t = trivia::NUM_CATEGORIES, value_parser = positive_count())]
    categories: usize,

    /// Number of clues per category
    #[arg(long, default_value_t = trivia::NUM_QUESTIONS_PER_CAT, value_parser = positive_count())]
    clues: usize,
}

impl GameProps {
    fn game_config(&self) -> trivia::GameConfig {
        trivia::GameConfig::new_unchecked(self.categories, self.clues)
    }
}

#[derive(Debug)]
pub(crate) struct GameView {
    session: GameSession,
    config: trivia::GameConfig,
    api: HttpTriviaApi,
}

impl GameView {
    fn start_game(&mut self, ctx: &Context<Self>) -> bool {
        if !self.session.begin_load() {
            return false;
        }

        let api = self.api.clone();
        let config = self.config;
        log::debug!("loading board {:?}", config);
        ctx.link().send_future(async move {
            Msg::BoardLoaded(trivia::load_board(&api, &config).await)
        });
        true
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            session: GameSession::default(),
            config: props.game_config(),
            api: HttpTriviaApi::new(&props.api_url),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            StartGame => self.start_game(ctx),
            BoardLoaded(result) => {
                self.session.finish_load(result);
                true
            }
            Reveal(pos) => self.session.reveal(pos),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onstart = ctx.link().callback(|_: MouseEvent| Msg::StartGame);
        let onreveal = ctx.link().callback(Msg::Reveal);

        html! {
            <TriviaBoard session={self.session.clone()} {onstart} {onreveal}/>
        }
    }
}
