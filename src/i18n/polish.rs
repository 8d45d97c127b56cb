use super::{Entry, Texts};

pub static TEXTS: Texts = Texts {
    title: "WISIELEC RPG",
    main_menu: "MENU GŁÓWNE",
    new_game: "Nowa gra",
    difficulty: "Wybierz poziom trudności",
    statistics: "Pokaż statystyki",
    inventory: "Pokaż ekwipunek",
    quest_log: "Pokaż dziennik zadań",
    shop: "Sklep z przedmiotami",
    character: "Karta postaci",
    language: "Wybierz język",
    exit: "Wyjście",
    select_option: "Wybierz opcję:",
    invalid_option: "Nieprawidłowa opcja. Spróbuj ponownie.",
    press_enter: "Naciśnij Enter, aby kontynuować...",

    easy: "Łatwy (8 prób)",
    medium: "Średni (6 prób)",
    hard: "Trudny (4 próby)",
    difficulty_set: "Ustawiono poziom trudności:",
    default_difficulty: "Nieprawidłowa opcja. Ustawiono średni poziom trudności.",

    word: "Słowo:",
    wrong_guesses: "Błędne próby:",
    remaining_attempts: "Pozostałe próby:",
    points: "Punkty:",
    progress: "Postęp:",
    enter_letter: "Podaj literę",
    invalid_character: "Nieprawidłowy znak. Wprowadź literę alfabetu.",
    already_guessed: "Ta litera była już sprawdzana.",

    congratulations: "GRATULACJE!",
    you_won: "Odgadłeś słowo:",
    you_lost: "PRZEGRAŁEŚ! Słowo to:",
    you_earned: "Zdobyłeś",
    points_suffix: "punktów",

    level: "Poziom:",
    experience: "Doświadczenie:",
    intelligence: "Inteligencja:",
    luck: "Szczęście:",
    perception: "Percepcja:",
    resilience: "Odporność:",
    hint_chance: "szansy na podpowiedź",
    mistake_avoidance: "szansy na uniknięcie błędu",
    points_per_hit: "pkt za trafienie",
    extra_attempts: "dodatkowych prób",
    level_up: "AWANS POZIOMU",
    quest_completed: "ZADANIE UKOŃCZONE",

    active_quests: "Aktywne zadania:",
    completed_quests: "Ukończone zadania:",
    no_active_quests: "Brak aktywnych zadań",
    reward: "Nagroda:",
    empty_inventory: "Ekwipunek jest pusty",
    used: "zużyty",
    price: "Cena:",
    your_xp: "Twoje XP:",
    bought: "Kupiono:",
    not_enough_xp: "Za mało doświadczenia.",
    inventory_full: "Ekwipunek jest pełny.",
    item_not_found: "Brak takiego nieużytego przedmiotu.",
    back: "Powrót",
    item_used: "Użyto:",
    item_no_effect: "Teraz nie przyniósł żadnego efektu.",
    revealed: "Odkryto:",
    select_item: "Numer przedmiotu do użycia (Enter, aby wrócić):",
    select_purchase: "Numer przedmiotu do kupienia (Enter, aby wrócić):",
    item_hint: "Wpisz numer przedmiotu zamiast litery, aby go użyć.",
    round_over_hint: "n: nowa gra   q: wyjście",
    item_needs_round: "Tego przedmiotu można użyć tylko w trakcie gry.",
    rarities: ["Pospolity", "Niepospolity", "Rzadki", "Epicki", "Legendarny"],
    items: &[
        Entry {
            id: "potion_hint",
            name: "Mikstura Podpowiedzi",
            description: "Odkrywa losową literę w aktualnym słowie",
        },
        Entry {
            id: "scroll_extra_life",
            name: "Zwój Dodatkowego Życia",
            description: "Dodaje jedną dodatkową próbę",
        },
        Entry {
            id: "amulet_wisdom",
            name: "Amulet Mądrości",
            description: "Zwiększa inteligencję o 2 podczas noszenia",
        },
        Entry {
            id: "ring_fortune",
            name: "Pierścień Fortuny",
            description: "Zwiększa szczęście o 3 podczas noszenia",
        },
    ],
    quests: &[
        Entry {
            id: "quest_novice",
            name: "Początkujący Odgadywacz",
            description: "Odgadnij poprawnie 3 słowa",
        },
        Entry {
            id: "quest_perfect",
            name: "Perfekcyjna Gra",
            description: "Odgadnij słowo bez żadnego błędu",
        },
        Entry {
            id: "quest_difficult",
            name: "Mistrz Trudności",
            description: "Wygraj grę na trudnym poziomie",
        },
    ],

    games_played: "Rozegrane gry:",
    games_won: "Wygrane gry:",
    win_rate: "Współczynnik wygranych:",
    total_points: "Łączna liczba punktów:",
    average_score: "Średni wynik:",
    highest_score: "Najwyższy wynik:",
    recent_games: "OSTATNIE GRY",
    won: "WYGRANA",
    lost: "PRZEGRANA",
};
