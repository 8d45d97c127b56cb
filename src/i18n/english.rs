use super::Texts;

pub static TEXTS: Texts = Texts {
    title: "HANGMAN RPG",
    main_menu: "MAIN MENU",
    new_game: "New game",
    difficulty: "Select difficulty level",
    statistics: "Show statistics",
    inventory: "Show inventory",
    quest_log: "Show quest log",
    shop: "Item shop",
    character: "Character sheet",
    language: "Select language",
    exit: "Exit",
    select_option: "Select an option:",
    invalid_option: "Invalid option. Try again.",
    press_enter: "Press Enter to continue...",

    easy: "Easy (8 attempts)",
    medium: "Medium (6 attempts)",
    hard: "Hard (4 attempts)",
    difficulty_set: "Difficulty set to:",
    default_difficulty: "Invalid option. Difficulty set to medium.",

    word: "Word:",
    wrong_guesses: "Wrong guesses:",
    remaining_attempts: "Remaining attempts:",
    points: "Points:",
    progress: "Progress:",
    enter_letter: "Enter a letter",
    invalid_character: "Invalid character. Enter a letter of the alphabet.",
    already_guessed: "You already tried that letter.",

    congratulations: "CONGRATULATIONS!",
    you_won: "You guessed the word:",
    you_lost: "YOU LOST! The word was:",
    you_earned: "You earned",
    points_suffix: "points",

    level: "Level:",
    experience: "Experience:",
    intelligence: "Intelligence:",
    luck: "Luck:",
    perception: "Perception:",
    resilience: "Resilience:",
    hint_chance: "hint chance",
    mistake_avoidance: "chance to avoid a mistake",
    points_per_hit: "points per hit",
    extra_attempts: "extra attempts",
    level_up: "LEVEL UP",
    quest_completed: "QUEST COMPLETED",

    active_quests: "Active quests:",
    completed_quests: "Completed quests:",
    no_active_quests: "No active quests",
    reward: "Reward:",
    empty_inventory: "Your inventory is empty",
    used: "used",
    price: "Price:",
    your_xp: "Your XP:",
    bought: "Bought:",
    not_enough_xp: "Not enough experience.",
    inventory_full: "Your inventory is full.",
    item_not_found: "No such unused item.",
    back: "Back",
    item_used: "Used:",
    item_no_effect: "It had no effect right now.",
    revealed: "Revealed:",
    select_item: "Number of the item to use (Enter to go back):",
    select_purchase: "Number of the item to buy (Enter to go back):",
    item_hint: "Type an item number instead of a letter to use it.",
    round_over_hint: "n: new game   q: quit",
    item_needs_round: "This item can only be used during a game.",
    rarities: ["Common", "Uncommon", "Rare", "Epic", "Legendary"],
    // The catalogue is written in English already
    items: &[],
    quests: &[],

    games_played: "Games played:",
    games_won: "Games won:",
    win_rate: "Win rate:",
    total_points: "Total points:",
    average_score: "Average score:",
    highest_score: "Highest score:",
    recent_games: "RECENT GAMES",
    won: "WON",
    lost: "LOST",
};
